use moviecache_core::movies::Movie;

/// A small slice of the IMDB top list used to seed the in-memory repository.
pub fn generate_mock_movies() -> Vec<Movie> {
    vec![
        Movie::new("The Shawshank Redemption", 1994, 9.3, "Frank Darabont", "Drama")
            .with_stars(["Tim Robbins", "Morgan Freeman", "Bob Gunton", "William Sadler"])
            .with_overview(
                "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
            ),
        Movie::new("The Godfather", 1972, 9.2, "Francis Ford Coppola", "Crime, Drama")
            .with_stars(["Marlon Brando", "Al Pacino", "James Caan", "Diane Keaton"])
            .with_overview(
                "An organized crime dynasty's aging patriarch transfers control of his empire to his reluctant son.",
            ),
        Movie::new("The Dark Knight", 2008, 9.0, "Christopher Nolan", "Action, Crime, Drama")
            .with_stars(["Christian Bale", "Heath Ledger", "Aaron Eckhart", "Michael Caine"])
            .with_overview(
                "Batman must accept one of the greatest tests of his ability to fight injustice when the Joker wreaks havoc on Gotham.",
            ),
        Movie::new("The Godfather: Part II", 1974, 9.0, "Francis Ford Coppola", "Crime, Drama")
            .with_stars(["Al Pacino", "Robert De Niro", "Robert Duvall", "Diane Keaton"]),
        Movie::new("12 Angry Men", 1957, 9.0, "Sidney Lumet", "Crime, Drama")
            .with_stars(["Henry Fonda", "Lee J. Cobb", "Martin Balsam", "John Fiedler"]),
        Movie::new("Pulp Fiction", 1994, 8.9, "Quentin Tarantino", "Crime, Drama")
            .with_stars(["John Travolta", "Uma Thurman", "Samuel L. Jackson", "Bruce Willis"]),
        Movie::new(
            "The Lord of the Rings: The Return of the King",
            2003,
            8.9,
            "Peter Jackson",
            "Action, Adventure, Drama",
        )
        .with_stars(["Elijah Wood", "Viggo Mortensen", "Ian McKellen", "Orlando Bloom"]),
        Movie::new("Inception", 2010, 8.8, "Christopher Nolan", "Action, Adventure, Sci-Fi")
            .with_stars([
                "Leonardo DiCaprio",
                "Joseph Gordon-Levitt",
                "Elliot Page",
                "Ken Watanabe",
            ])
            .with_overview(
                "A thief who steals corporate secrets through dream-sharing technology is given the task of planting an idea.",
            ),
        Movie::new("Fight Club", 1999, 8.8, "David Fincher", "Drama")
            .with_stars(["Brad Pitt", "Edward Norton", "Meat Loaf", "Zach Grenier"]),
        Movie::new("Forrest Gump", 1994, 8.8, "Robert Zemeckis", "Drama, Romance")
            .with_stars(["Tom Hanks", "Robin Wright", "Gary Sinise", "Sally Field"]),
        Movie::new("The Matrix", 1999, 8.7, "Lana Wachowski", "Action, Sci-Fi")
            .with_stars([
                "Keanu Reeves",
                "Laurence Fishburne",
                "Carrie-Anne Moss",
                "Hugo Weaving",
            ]),
        Movie::new("Goodfellas", 1990, 8.7, "Martin Scorsese", "Biography, Crime, Drama")
            .with_stars(["Robert De Niro", "Ray Liotta", "Joe Pesci", "Lorraine Bracco"]),
        Movie::new("Interstellar", 2014, 8.6, "Christopher Nolan", "Adventure, Drama, Sci-Fi")
            .with_stars([
                "Matthew McConaughey",
                "Anne Hathaway",
                "Jessica Chastain",
                "Mackenzie Foy",
            ]),
        Movie::new("Se7en", 1995, 8.6, "David Fincher", "Crime, Drama, Mystery")
            .with_stars(["Morgan Freeman", "Brad Pitt", "Kevin Spacey", "Andrew Kevin Walker"]),
        Movie::new("The Silence of the Lambs", 1991, 8.6, "Jonathan Demme", "Crime, Drama, Thriller")
            .with_stars(["Jodie Foster", "Anthony Hopkins", "Lawrence A. Bonney", "Kasi Lemmons"]),
        Movie::new("The Departed", 2006, 8.5, "Martin Scorsese", "Crime, Drama, Thriller")
            .with_stars(["Leonardo DiCaprio", "Matt Damon", "Jack Nicholson", "Mark Wahlberg"]),
        Movie::new("The Prestige", 2006, 8.5, "Christopher Nolan", "Drama, Mystery, Sci-Fi")
            .with_stars(["Christian Bale", "Hugh Jackman", "Scarlett Johansson", "Michael Caine"]),
        Movie::new("Gladiator", 2000, 8.5, "Ridley Scott", "Action, Adventure, Drama")
            .with_stars(["Russell Crowe", "Joaquin Phoenix", "Connie Nielsen", "Oliver Reed"]),
        Movie::new("Heat", 1995, 8.3, "Michael Mann", "Action, Crime, Drama")
            .with_stars(["Al Pacino", "Robert De Niro", "Val Kilmer", "Jon Voight"]),
        Movie::new("Batman Begins", 2005, 8.2, "Christopher Nolan", "Action, Adventure")
            .with_stars(["Christian Bale", "Michael Caine", "Ken Watanabe", "Liam Neeson"]),
        Movie::new("Casino", 1995, 8.2, "Martin Scorsese", "Crime, Drama")
            .with_stars(["Robert De Niro", "Sharon Stone", "Joe Pesci", "James Woods"]),
        Movie::new("The Dark Knight Rises", 2012, 8.4, "Christopher Nolan", "Action, Adventure")
            .with_stars(["Christian Bale", "Tom Hardy", "Anne Hathaway", "Gary Oldman"]),
        Movie::new("Batman", 1989, 7.5, "Tim Burton", "Action, Adventure")
            .with_stars(["Michael Keaton", "Jack Nicholson", "Kim Basinger", "Robert Wuhl"]),
        Movie::new("Collateral", 2004, 7.5, "Michael Mann", "Action, Crime, Drama")
            .with_stars(["Tom Cruise", "Jamie Foxx", "Jada Pinkett Smith", "Mark Ruffalo"]),
    ]
}

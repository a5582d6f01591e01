//! Built-in corpora for value kinds the `fake` crate does not cover.

pub const BLOOD_GROUPS: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

pub const EMAIL_DOMAINS: &[&str] = &["gmail.com", "mail.ru"];

pub const GENDERS: &[&str] = &["MALE", "FEMALE"];

/// ISO 3166-1 alpha-3 code and capital city.
pub const COUNTRIES: &[(&str, &str)] = &[
    ("ARG", "Buenos Aires"),
    ("AUS", "Canberra"),
    ("AUT", "Vienna"),
    ("BEL", "Brussels"),
    ("BRA", "Brasilia"),
    ("CAN", "Ottawa"),
    ("CHE", "Bern"),
    ("CHL", "Santiago"),
    ("CHN", "Beijing"),
    ("CZE", "Prague"),
    ("DEU", "Berlin"),
    ("DNK", "Copenhagen"),
    ("EGY", "Cairo"),
    ("ESP", "Madrid"),
    ("FIN", "Helsinki"),
    ("FRA", "Paris"),
    ("GBR", "London"),
    ("GRC", "Athens"),
    ("HUN", "Budapest"),
    ("IND", "New Delhi"),
    ("IRL", "Dublin"),
    ("ITA", "Rome"),
    ("JPN", "Tokyo"),
    ("KAZ", "Astana"),
    ("KEN", "Nairobi"),
    ("KOR", "Seoul"),
    ("MEX", "Mexico City"),
    ("NGA", "Abuja"),
    ("NLD", "Amsterdam"),
    ("NOR", "Oslo"),
    ("NZL", "Wellington"),
    ("PER", "Lima"),
    ("POL", "Warsaw"),
    ("PRT", "Lisbon"),
    ("ROU", "Bucharest"),
    ("SWE", "Stockholm"),
    ("THA", "Bangkok"),
    ("TUR", "Ankara"),
    ("UKR", "Kyiv"),
    ("USA", "Washington"),
    ("UZB", "Tashkent"),
    ("VNM", "Hanoi"),
    ("ZAF", "Pretoria"),
];

pub const BOOK_TITLES: &[&str] = &[
    "A Farewell to Arms",
    "Brave New World",
    "Crime and Punishment",
    "Dune",
    "East of Eden",
    "Great Expectations",
    "Invisible Man",
    "Moby Dick",
    "Of Mice and Men",
    "One Hundred Years of Solitude",
    "Pride and Prejudice",
    "The Brothers Karamazov",
    "The Count of Monte Cristo",
    "The Grapes of Wrath",
    "The Master and Margarita",
    "The Old Man and the Sea",
    "The Sound and the Fury",
    "To the Lighthouse",
    "Vanity Fair",
    "War and Peace",
];

pub const BOOK_AUTHORS: &[&str] = &[
    "Alexandre Dumas",
    "Aldous Huxley",
    "Charles Dickens",
    "Ernest Hemingway",
    "Frank Herbert",
    "Fyodor Dostoevsky",
    "Gabriel Garcia Marquez",
    "Herman Melville",
    "Jane Austen",
    "John Steinbeck",
    "Leo Tolstoy",
    "Mikhail Bulgakov",
    "Ralph Ellison",
    "Virginia Woolf",
    "William Faulkner",
    "William Makepeace Thackeray",
];

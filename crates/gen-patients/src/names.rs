pub const MALE_FIRST_NAMES: [&str; 24] = [
    "Mohamed", "Ahmed", "Ali", "Youssef", "Hamza", "Omar", "Khalil", "Amine", "Mehdi", "Anis",
    "Bilel", "Walid", "Sami", "Karim", "Nabil", "Slim", "Hichem", "Tarek", "Fares", "Aymen",
    "Oussama", "Skander", "Wassim", "Ridha",
];

pub const FEMALE_FIRST_NAMES: [&str; 24] = [
    "Fatma", "Amira", "Mariem", "Sarra", "Ines", "Nour", "Yasmine", "Rania", "Salma", "Hiba",
    "Asma", "Emna", "Olfa", "Sonia", "Leila", "Khadija", "Aicha", "Zeineb", "Rim", "Hela",
    "Meriem", "Wafa", "Nesrine", "Chaima",
];

pub const LAST_NAMES: [&str; 26] = [
    "Ben Ali", "Trabelsi", "Gharbi", "Jebali", "Mejri", "Hammami", "Bouazizi", "Ben Salah",
    "Chaabane", "Dridi", "Ayari", "Sassi", "Ferchichi", "Khemiri", "Mansouri", "Ben Amor",
    "Jlassi", "Hajji", "Zouari", "Baccouche", "Masmoudi", "Karoui", "Ben Youssef", "Saidi",
    "Riahi", "Tlili",
];

pub const STREETS: [&str; 10] = [
    "Rue de Marseille",
    "Avenue Habib Bourguiba",
    "Rue Ibn Khaldoun",
    "Avenue de la Liberté",
    "Rue de Rome",
    "Avenue Mohamed V",
    "Rue Alain Savary",
    "Avenue de Carthage",
    "Rue Farhat Hached",
    "Avenue Hédi Chaker",
];

pub const CITIES: [&str; 10] = [
    "Tunis", "Sfax", "Sousse", "Ariana", "Bizerte", "Nabeul", "Monastir", "Kairouan", "Gabès",
    "La Marsa",
];

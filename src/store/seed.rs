use crate::model::{Car, Person};

/// The people every seeded store starts with.
pub fn seed_people() -> Vec<Person> {
    vec![
        Person::new("1", "Bill", "Gates"),
        Person::new("2", "Steve", "Jobs"),
        Person::new("3", "Linux", "Torvalds"),
    ]
}

/// Three cars per seeded person.
pub fn seed_cars() -> Vec<Car> {
    vec![
        Car::new("1", 2019, "Toyota", "Corolla", 40000.0, "1"),
        Car::new("2", 2018, "Lexus", "LX 600", 13000.0, "1"),
        Car::new("3", 2017, "Honda", "Civic", 20000.0, "1"),
        Car::new("4", 2019, "Acura", "MDX", 60000.0, "2"),
        Car::new("5", 2018, "Ford", "Focus", 35000.0, "2"),
        Car::new("6", 2017, "Honda", "Pilot", 45000.0, "2"),
        Car::new("7", 2019, "Volkswagen", "Golf", 40000.0, "3"),
        Car::new("8", 2018, "Kia", "Sorento", 45000.0, "3"),
        Car::new("9", 2017, "Volvo", "XC40", 55000.0, "3"),
    ]
}

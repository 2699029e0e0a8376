use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::model::{Car, Person};
use crate::store::{seed_cars, seed_people};

#[derive(Serialize)]
struct SeedData {
    people: Vec<Person>,
    cars: Vec<Car>,
}

pub fn handle_seed(json: bool) -> Result<()> {
    let data = SeedData {
        people: seed_people(),
        cars: seed_cars(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!("{}", "People".bold());
    for person in &data.people {
        println!("  {} {}", person.id.cyan(), person.full_name());
    }

    println!("{}", "Cars".bold());
    for car in &data.cars {
        println!(
            "  {} {} {} {} ${:.0} (owner {})",
            car.id.cyan(),
            car.year,
            car.make,
            car.model,
            car.price,
            car.person_id.cyan()
        );
    }
    Ok(())
}

//! Basic usage example for addressinput-rs.
//!
//! This example demonstrates the core functionality of the library:
//! - Building an address from raw form input
//! - Recording validation problems against its fields
//! - Resolving metadata keys
//!
//! Run with: cargo run --example basic_usage

use addressinput_rs::{
    AddressBuilder, AddressDataKey, AddressField, AddressProblemType, AddressProblems, Error,
};

fn main() -> Result<(), Error> {
    println!("addressinput-rs Basic Usage Example");
    println!("===================================\n");

    // Example 1: Building an address
    println!("1. Building an Address");
    println!("----------------------");

    let address = AddressBuilder::new()
        .set_country("CH")?
        .set_locality("  Zürich  ")
        .set_postal_code("8002")
        .set_organization("")
        .add_address_line("Brandschenkestrasse 110\n\n  Floor 4 ")
        .set_language_code("de-CH")
        .build();

    println!("{address}");
    for (i, line) in address.address_lines().iter().enumerate() {
        println!("  Line {}: {}", i + 1, line);
    }
    println!();

    // Example 2: Recording problems
    println!("2. Recording Validation Problems");
    println!("--------------------------------");

    let required = [
        AddressField::Country,
        AddressField::Locality,
        AddressField::PostalCode,
        AddressField::Recipient,
    ];

    let mut problems = AddressProblems::new();
    for field in required {
        if address.field_value(field)?.is_none() {
            problems.add(field, AddressProblemType::MissingRequiredField)?;
        }
    }
    if address.address_lines().is_empty() {
        problems.add(
            AddressField::StreetAddress,
            AddressProblemType::MissingRequiredField,
        )?;
    }

    if problems.is_empty() {
        println!("No problems found");
    } else {
        for (field, problem) in problems.iter() {
            println!("  {field}: {problem}");
        }
    }
    println!();

    // Example 3: Metadata keys
    println!("3. Resolving Metadata Keys");
    println!("--------------------------");

    for name in ["fmt", "REQUIRE", "zipNameType", "bogus"] {
        match AddressDataKey::resolve(name) {
            Ok(key) => println!("  {name} -> {key:?}"),
            Err(e) => println!("  {name} -> {e}"),
        }
    }

    Ok(())
}

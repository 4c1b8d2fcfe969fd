//! Mixing variants by hand
//! Example: a B1 collaborating with an A2
//!
//! Run with: cargo run --example cross_variant

use abstract_factory::{
    AbstractFactory, AbstractProductA, AbstractProductB, ConcreteFactory1, ConcreteFactory2,
};

fn main() {
    // Usage: the factories never mix variants, but the product contracts
    // still accept any collaborator.
    println!("=== Matching Pair (factory 1) ===");
    let factory = ConcreteFactory1;
    let a1 = factory.create_product_a();
    let b1 = factory.create_product_b();
    println!("{}", b1.collaborate(a1.as_ref()));

    println!("\n=== Mismatched Pair (B from factory 1, A from factory 2) ===");
    let a2 = ConcreteFactory2.create_product_a();
    println!("{}", b1.collaborate(a2.as_ref()));
    println!("A variant: {}, B variant: {}", a2.variant(), b1.variant());

    println!("\n=== Key Points ===");
    println!("- Only a factory guarantees a matching pair");
    println!("- collaborate() accepts any &dyn AbstractProductA");
    println!("- A mismatch is not an error, just an unintended combination");
}

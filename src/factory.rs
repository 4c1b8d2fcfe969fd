use tracing::debug;

use crate::product_a::{AbstractProductA, ConcreteProductA1, ConcreteProductA2};
use crate::product_b::{AbstractProductB, ConcreteProductB1, ConcreteProductB2};
use crate::variant::Variant;

/// Creates one product of each family. Every implementation must return
/// products of its own variant for both families.
pub trait AbstractFactory {
    fn create_product_a(&self) -> Box<dyn AbstractProductA>;

    fn create_product_b(&self) -> Box<dyn AbstractProductB>;

    fn variant(&self) -> Variant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteFactory1;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteFactory2;

impl AbstractFactory for ConcreteFactory1 {
    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        debug!(factory = 1, product = "A1", "creating product");
        Box::new(ConcreteProductA1)
    }

    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        debug!(factory = 1, product = "B1", "creating product");
        Box::new(ConcreteProductB1)
    }

    fn variant(&self) -> Variant {
        Variant::One
    }
}

impl AbstractFactory for ConcreteFactory2 {
    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        debug!(factory = 2, product = "A2", "creating product");
        Box::new(ConcreteProductA2)
    }

    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        debug!(factory = 2, product = "B2", "creating product");
        Box::new(ConcreteProductB2)
    }

    fn variant(&self) -> Variant {
        Variant::Two
    }
}

pub fn factory_for(variant: Variant) -> Box<dyn AbstractFactory> {
    match variant {
        Variant::One => Box::new(ConcreteFactory1),
        Variant::Two => Box::new(ConcreteFactory2),
    }
}

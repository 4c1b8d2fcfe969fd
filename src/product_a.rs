use crate::variant::Variant;

/// First product family: something that can describe itself.
pub trait AbstractProductA {
    fn label_a(&self) -> String;

    fn variant(&self) -> Variant;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductA1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductA2;

impl AbstractProductA for ConcreteProductA1 {
    fn label_a(&self) -> String {
        "result of product A1.".to_string()
    }

    fn variant(&self) -> Variant {
        Variant::One
    }
}

impl AbstractProductA for ConcreteProductA2 {
    fn label_a(&self) -> String {
        "result of product A2.".to_string()
    }

    fn variant(&self) -> Variant {
        Variant::Two
    }
}

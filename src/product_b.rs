use crate::product_a::AbstractProductA;
use crate::variant::Variant;

/// Second product family. A B product can work with any A product, but only
/// the A from its own variant is the intended partner.
pub trait AbstractProductB {
    fn label_b(&self) -> String;

    /// Composes this product's result with `collaborator.label_a()`.
    /// The collaborator's variant is not checked.
    fn collaborate(&self, collaborator: &dyn AbstractProductA) -> String;

    fn variant(&self) -> Variant;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductB1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductB2;

impl AbstractProductB for ConcreteProductB1 {
    fn label_b(&self) -> String {
        "result of product B1.".to_string()
    }

    fn collaborate(&self, collaborator: &dyn AbstractProductA) -> String {
        format!(
            "result of B1 collaborating with the ({})",
            collaborator.label_a()
        )
    }

    fn variant(&self) -> Variant {
        Variant::One
    }
}

impl AbstractProductB for ConcreteProductB2 {
    fn label_b(&self) -> String {
        "result of product B2.".to_string()
    }

    fn collaborate(&self, collaborator: &dyn AbstractProductA) -> String {
        format!(
            "result of B2 collaborating with the ({})",
            collaborator.label_a()
        )
    }

    fn variant(&self) -> Variant {
        Variant::Two
    }
}

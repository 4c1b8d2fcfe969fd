//! # Abstract Factory in Rust
//!
//! Two product families and two factories, each factory producing one
//! mutually-compatible pair:
//!
//! ## Product families
//! - `AbstractProductA`: a single labelling method
//! - `AbstractProductB`: a label plus collaboration with any `AbstractProductA`
//!
//! ## Factories
//! - `ConcreteFactory1` builds A1 + B1
//! - `ConcreteFactory2` builds A2 + B2
//!
//! ## Client
//! - `client_code` only ever sees `&dyn AbstractFactory`
//! - `run_demo` drives it once per configured variant
//!
//! Run the demo with: `cargo run --bin abstract_factory`

pub mod client;
pub mod config;
pub mod error;
pub mod factory;
pub mod logging;
pub mod product_a;
pub mod product_b;
pub mod variant;

pub use client::{client_code, run_demo};
pub use config::DemoConfig;
pub use error::{DemoError, Result};
pub use factory::{factory_for, AbstractFactory, ConcreteFactory1, ConcreteFactory2};
pub use product_a::{AbstractProductA, ConcreteProductA1, ConcreteProductA2};
pub use product_b::{AbstractProductB, ConcreteProductB1, ConcreteProductB2};
pub use variant::Variant;

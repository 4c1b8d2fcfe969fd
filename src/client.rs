use std::io::Write;

use colored::Colorize;
use tracing::{debug, info};

use crate::config::DemoConfig;
use crate::error::Result;
use crate::factory::{factory_for, AbstractFactory};
use crate::variant::Variant;

/// Works with any factory through the abstract types only: builds one pair
/// and writes B's label followed by B collaborating with A.
pub fn client_code<W: Write>(factory: &dyn AbstractFactory, out: &mut W) -> Result<()> {
    let product_a = factory.create_product_a();
    let product_b = factory.create_product_b();

    writeln!(out, "{}", product_b.label_b())?;
    writeln!(out, "{}", product_b.collaborate(product_a.as_ref()))?;
    Ok(())
}

fn header(position: usize, variant: Variant) -> String {
    if position == 0 {
        format!(
            "Client: Testing client code with the {} factory type...",
            variant.ordinal()
        )
    } else {
        format!(
            "Client: Testing the same client code with the {} factory type...",
            variant.ordinal()
        )
    }
}

/// Runs `client_code` once per configured variant, each block followed by a
/// blank line.
pub fn run_demo<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    config.validate()?;

    for (position, &variant) in config.variants.iter().enumerate() {
        let factory = factory_for(variant);
        debug!(%variant, position, "running client");

        let line = header(position, variant);
        if config.color {
            writeln!(out, "{}", line.bold())?;
        } else {
            writeln!(out, "{line}")?;
        }

        client_code(factory.as_ref(), &mut *out)?;
        writeln!(out)?;
    }

    info!(runs = config.variants.len(), "demo finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DemoError;
    use crate::factory::{ConcreteFactory1, ConcreteFactory2};

    const EXPECTED: &str = "\
Client: Testing client code with the first factory type...
result of product B1.
result of B1 collaborating with the (result of product A1.)

Client: Testing the same client code with the second factory type...
result of product B2.
result of B2 collaborating with the (result of product A2.)

";

    fn capture(factory: &dyn AbstractFactory) -> String {
        let mut out = Vec::new();
        client_code(factory, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_client_code_factory_one() {
        assert_eq!(
            capture(&ConcreteFactory1),
            "result of product B1.\nresult of B1 collaborating with the (result of product A1.)\n"
        );
    }

    #[test]
    fn test_client_code_factory_two() {
        assert_eq!(
            capture(&ConcreteFactory2),
            "result of product B2.\nresult of B2 collaborating with the (result of product A2.)\n"
        );
    }

    #[test]
    fn test_client_code_is_idempotent() {
        let factory = ConcreteFactory1;
        assert_eq!(capture(&factory), capture(&factory));
    }

    #[test]
    fn test_run_demo_default_output() {
        let mut out = Vec::new();
        run_demo(&DemoConfig::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
    }

    #[test]
    fn test_run_demo_follows_configured_order() {
        let config = DemoConfig {
            variants: vec![Variant::Two, Variant::One],
            color: false,
        };
        let mut out = Vec::new();
        run_demo(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Client: Testing client code with the second factory type..."
        );
        assert_eq!(lines[1], "result of product B2.");
        assert_eq!(
            lines[4],
            "Client: Testing the same client code with the first factory type..."
        );
        assert_eq!(lines[5], "result of product B1.");
    }

    #[test]
    fn test_run_demo_rejects_empty_config() {
        let config = DemoConfig {
            variants: Vec::new(),
            color: false,
        };
        let mut out = Vec::new();
        assert!(matches!(
            run_demo(&config, &mut out),
            Err(DemoError::NoVariants)
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_failure_surfaces_as_io_error() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        assert!(matches!(
            client_code(&ConcreteFactory1, &mut Closed),
            Err(DemoError::Io(_))
        ));
    }
}

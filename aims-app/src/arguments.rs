use clap::Parser;
use std::fmt;
use std::str::FromStr;

/// Place a rush order for the current cart and print the invoice
#[derive(Parser, Debug)]
pub struct Arguments {
    /// Recipient name (letters and spaces)
    #[clap(long, env = "AIMS_DELIVERY_NAME")]
    pub name: String,

    /// Ten digit phone number starting with 0
    #[clap(long, env = "AIMS_DELIVERY_PHONE")]
    pub phone: String,

    /// Street address (letters, digits and spaces)
    #[clap(long, env = "AIMS_DELIVERY_ADDRESS")]
    pub address: String,

    /// Add media to the cart before ordering, as `MEDIA_ID:QUANTITY`.
    /// May be repeated.
    #[clap(long = "item")]
    pub items: Vec<CartEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartEntry {
    pub media_id: i64,
    pub quantity: u32,
}

impl FromStr for CartEntry {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = s
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("expected MEDIA_ID:QUANTITY, got {:?}", s))?;
        Ok(Self {
            media_id: id.trim().parse()?,
            quantity: quantity.trim().parse()?,
        })
    }
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "name: {}", self.name)?;
        writeln!(f, "phone: SECRET")?;
        writeln!(f, "address: {}", self.address)?;
        write!(f, "items: {:?}", self.items)
    }
}

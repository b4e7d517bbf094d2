use clap::{Args, Parser, Subcommand};

use addrdb_core::Address;

/// CLI arguments for addrdb-cli
#[derive(Debug, Parser)]
#[command(
    name = "addrdb",
    version,
    about = "CLI for resolving, validating and formatting international postal addresses"
)]
pub struct CliArgs {
    /// Directory containing the per-region JSON datasets (e.g. us.json)
    #[arg(short = 'd', long = "data-dir", global = true, default_value = "data")]
    pub data_dir: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the validation rules resolved for a country
    Rules {
        /// ISO country code (e.g. DE, US)
        code: String,
    },

    /// Show the address form field order for a country
    FieldOrder {
        /// ISO country code (e.g. PL, CN)
        code: String,

        /// Use the Latin-script template
        #[arg(long)]
        latin: bool,
    },

    /// Validate and normalize an address
    Validate {
        #[command(flatten)]
        address: AddressArgs,
    },

    /// Render an address into display lines
    Format {
        #[command(flatten)]
        address: AddressArgs,

        /// Use the Latin-script template
        #[arg(long)]
        latin: bool,

        /// Latinize hierarchy labels before rendering
        #[arg(long)]
        latinize: bool,
    },
}

/// Address fields shared by the validate and format subcommands.
#[derive(Debug, Args)]
pub struct AddressArgs {
    /// ISO country code (e.g. DE, US)
    #[arg(long = "country")]
    pub country_code: Option<String>,

    /// Administrative area (state, province, prefecture, …)
    #[arg(long = "area")]
    pub country_area: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    /// Dependent locality (district, suburb, …)
    #[arg(long = "city-area")]
    pub city_area: Option<String>,

    #[arg(long = "postal")]
    pub postal_code: Option<String>,

    #[arg(long = "street")]
    pub street_address: Option<String>,

    #[arg(long = "sorting")]
    pub sorting_code: Option<String>,

    /// Recipient name
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long = "company")]
    pub company_name: Option<String>,
}

impl AddressArgs {
    pub fn into_address(self) -> Address {
        Address {
            name: self.name.unwrap_or_default(),
            company_name: self.company_name.unwrap_or_default(),
            street_address: self.street_address.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            city_area: self.city_area.unwrap_or_default(),
            country_area: self.country_area.unwrap_or_default(),
            sorting_code: self.sorting_code.unwrap_or_default(),
            postal_code: self.postal_code.unwrap_or_default(),
            country_code: self.country_code.unwrap_or_default(),
        }
    }
}

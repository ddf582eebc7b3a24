use chrono::NaiveDate;
use clap::{Args as ClapArgs, Parser, Subcommand};
use contract_registry::contract::{Contract, ContractParty};
use contract_registry::query::ContractFilter;
use contract_registry::utils::CONTRACTS_FOLDER;
use contract_registry::{CreateContractOptions, UpdateContractOptions};
use std::path::PathBuf;

/// Contract Registry - numbered contract register kept as Markdown files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Folder holding the contract files
    #[arg(long, env = "CONTRACT_REGISTRY_DIR", default_value = CONTRACTS_FOLDER)]
    pub store_dir: PathBuf,

    /// Registry config file (default: <store-dir>/config.toml)
    #[arg(long, env = "CONTRACT_REGISTRY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable JSON log format (for log aggregation)
    #[arg(long, env = "CONTRACT_REGISTRY_LOG_JSON", default_value = "false")]
    pub log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "CONTRACT_REGISTRY_LOG_ROTATION", default_value = "daily")]
    pub log_rotation: String,

    /// Custom log directory (default: ~/.contract-registry/logs)
    #[arg(long, env = "CONTRACT_REGISTRY_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log level for stderr and the log file (`RUST_LOG` takes precedence)
    #[arg(long, env = "CONTRACT_REGISTRY_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the number a contract should carry
    NextNumber {
        /// Identity of a stored contract; omit for a new contract
        #[arg(long)]
        id: Option<String>,
    },
    /// Create a contract, taking the next number unless one is given
    Create {
        title: String,
        #[command(flatten)]
        fields: ContractFields,
    },
    /// Update a stored contract
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[command(flatten)]
        fields: ContractFields,
    },
    /// Show one contract
    Get {
        #[arg(long, conflicts_with = "number", required_unless_present = "number")]
        id: Option<String>,
        #[arg(long)]
        number: Option<u32>,
    },
    /// List contracts, ordered by number
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long = "type")]
        contract_type: Option<String>,
        /// Contract year; -1 lists all years
        #[arg(long, allow_hyphen_values = true)]
        year: Option<i32>,
        /// Text searched in title, filing and parties
        #[arg(long)]
        search: Option<String>,
    },
    /// List every year from the earliest to the latest contract date
    Years,
    /// Check the stored numbers for duplicates and gaps
    Check,
    /// Suggest existing values of a text property
    Complete {
        /// One of: title, coContractorA, coContractorB, contractPersonA,
        /// contractPersonB, signerA, signerB
        property: String,
        #[arg(default_value = "")]
        prefix: String,
        #[arg(long, default_value = "10")]
        limit: usize,
    },
}

/// Contract fields shared by `create` and `update`.
#[derive(ClapArgs, Debug, Default)]
pub struct ContractFields {
    #[arg(long)]
    pub number: Option<u32>,
    /// Contract date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long = "type")]
    pub contract_type: Option<String>,
    #[arg(long)]
    pub body: Option<String>,
    #[arg(long)]
    pub valid_from: Option<NaiveDate>,
    #[arg(long)]
    pub valid_until: Option<NaiveDate>,
    /// Where the signed copy is filed
    #[arg(long)]
    pub filing: Option<String>,
    #[arg(long)]
    pub co_contractor_a: Option<String>,
    #[arg(long)]
    pub contract_person_a: Option<String>,
    #[arg(long)]
    pub signer_a: Option<String>,
    #[arg(long)]
    pub signing_date_a: Option<NaiveDate>,
    #[arg(long)]
    pub co_contractor_b: Option<String>,
    #[arg(long)]
    pub contract_person_b: Option<String>,
    #[arg(long)]
    pub signer_b: Option<String>,
    #[arg(long)]
    pub signing_date_b: Option<NaiveDate>,
}

/// Party fields given on the command line; unset ones keep their value.
struct PartyFields {
    co_contractor: Option<String>,
    contract_person: Option<String>,
    signer: Option<String>,
    signing_date: Option<NaiveDate>,
}

impl PartyFields {
    fn is_empty(&self) -> bool {
        self.co_contractor.is_none()
            && self.contract_person.is_none()
            && self.signer.is_none()
            && self.signing_date.is_none()
    }

    fn apply(self, base: &ContractParty) -> ContractParty {
        ContractParty {
            co_contractor: self.co_contractor.or_else(|| base.co_contractor.clone()),
            contract_person: self.contract_person.or_else(|| base.contract_person.clone()),
            signer: self.signer.or_else(|| base.signer.clone()),
            signing_date: self.signing_date.or(base.signing_date),
        }
    }
}

impl ContractFields {
    fn split_parties(&mut self) -> (PartyFields, PartyFields) {
        let party_a = PartyFields {
            co_contractor: self.co_contractor_a.take(),
            contract_person: self.contract_person_a.take(),
            signer: self.signer_a.take(),
            signing_date: self.signing_date_a.take(),
        };
        let party_b = PartyFields {
            co_contractor: self.co_contractor_b.take(),
            contract_person: self.contract_person_b.take(),
            signer: self.signer_b.take(),
            signing_date: self.signing_date_b.take(),
        };
        (party_a, party_b)
    }

    pub fn into_create(mut self, title: String) -> CreateContractOptions {
        let (party_a, party_b) = self.split_parties();
        let empty = ContractParty::default();
        CreateContractOptions {
            title,
            body: self.body.unwrap_or_default(),
            number: self.number,
            date: self.date,
            status: self.status,
            contract_type: self.contract_type,
            valid_from: self.valid_from,
            valid_until: self.valid_until,
            filing: self.filing,
            party_a: party_a.apply(&empty),
            party_b: party_b.apply(&empty),
        }
    }

    /// Options for `update`; party fields are merged into `current`'s parties.
    pub fn into_update(mut self, title: Option<String>, current: &Contract) -> UpdateContractOptions {
        let (party_a, party_b) = self.split_parties();
        let merge = |fields: PartyFields, base: &ContractParty| {
            (!fields.is_empty()).then(|| fields.apply(base))
        };
        UpdateContractOptions {
            title,
            body: self.body,
            number: self.number,
            date: self.date,
            status: self.status,
            contract_type: self.contract_type,
            valid_from: self.valid_from,
            valid_until: self.valid_until,
            filing: self.filing,
            party_a: merge(party_a, &current.frontmatter.party_a),
            party_b: merge(party_b, &current.frontmatter.party_b),
        }
    }
}

/// Build the listing filter from `list` arguments.
pub fn list_filter(
    status: Option<String>,
    contract_type: Option<String>,
    year: Option<i32>,
    search: Option<String>,
) -> ContractFilter {
    let mut filter = ContractFilter::new();
    filter.status = status;
    filter.contract_type = contract_type;
    if let Some(year) = year {
        filter = filter.with_year(year);
    }
    filter.search = search;
    filter
}

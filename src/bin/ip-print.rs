mod cli;

use std::{collections::LinkedList, process};

use clap::Parser;
use env_logger::Builder;
use log::{debug, error};

use ip_print::{
    address::{Address, AddressError},
    print_ip,
};

use cli::{Cli, Kind};

fn main() {
    let cli = Cli::parse();

    Builder::new().filter_level(cli.loglevel.into()).init();

    match cli.kind {
        Some(kind) => {
            if let Err(e) = run(kind, &cli) {
                error!("Unable to print address: {}", e);
                process::exit(1);
            }
        }
        None => run_demo(),
    }
}

fn run(kind: Kind, cli: &Cli) -> Result<(), AddressError> {
    let addr = Address::from_values(kind.address_kind(cli.int_type), &cli.values)?;
    debug!("Printing {:?} address", kind);
    print_ip(&addr);
    Ok(())
}

// One address in every supported representation
fn run_demo() {
    debug!("Printing demonstration addresses");
    print_ip(&-1i8);
    print_ip(&0i16);
    print_ip(&2130706433i32);
    print_ip(&8875824491850138409i64);
    print_ip("Hello, World!");
    print_ip(&vec![100, 200, 300, 400]);
    print_ip(&LinkedList::from([400, 300, 200, 100]));
    print_ip(&(123, 456, 789, 0));
}

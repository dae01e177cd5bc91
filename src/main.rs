use log4rs;
use std::error::Error;
use undercloud_wizard::cli::parse_kv_args;
use undercloud_wizard::output::{render_config, render_form};
use undercloud_wizard::{process_request, ResponseKind};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    log::info!("#Start main()");

    let raw = parse_kv_args(std::env::args().skip(1))?;
    let (kind, values) = process_request(&raw, None)?;

    match kind {
        ResponseKind::Generate if values.error().is_empty() => {
            print!("{}", render_config(&values)?);
        }
        _ => println!("{}", render_form(&values)),
    }

    Ok(())
}

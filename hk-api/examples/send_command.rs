//! Send one command to a Harman Kardon receiver
//!
//! Usage:
//!   cargo run -p hk-avr-api --example send_command -- <host> <zone> <action> [param]
//!
//! Examples:
//!   cargo run -p hk-avr-api --example send_command -- 192.168.1.50 "Main Zone" power-on
//!   cargo run -p hk-avr-api --example send_command -- 192.168.1.50 "Zone 2" source-selection TV
//!
//! Set HK_LOG_MODE=debug to see the connection and polling trace.

use std::env;
use std::process;

use hk_api::logging::init_logging_from_env;
use hk_api::{ApiError, AvrClient};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 4 {
        eprintln!("Usage: {} <host> <zone> <action> [param]", args[0]);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} 192.168.1.50 \"Main Zone\" power-on", args[0]);
        eprintln!("  {} 192.168.1.50 \"Zone 2\" source-selection TV", args[0]);
        process::exit(1);
    }

    if let Err(e) = init_logging_from_env() {
        eprintln!("Logging disabled: {}", e);
    }

    let host = &args[1];
    let zone = &args[2];
    let action = &args[3];
    let param = args.get(4).map(String::as_str);

    match run(host, zone, action, param) {
        Ok(reply) => println!("{}", reply),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}

fn run(host: &str, zone: &str, action: &str, param: Option<&str>) -> Result<String, ApiError> {
    let mut client = AvrClient::new(host)?;
    println!("Sending {} to {} on {}", action, zone, host);
    let reply = client.zone(zone)?.command(action, param)?;
    Ok(reply.into_string())
}

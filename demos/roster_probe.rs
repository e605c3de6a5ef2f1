use employee_desk::api::{ApiClient, LIST_FAILED};
use employee_desk::config::AppConfig;
use employee_desk::models::format_join_date;
use employee_desk::validation::{today, validate};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let config = AppConfig::with_api_base(args.get(1).map(String::as_str));

    let client = ApiClient::new(&config.api_base)?;
    println!("--- Headless roster check against {} ---", client.base_url());

    let records = match client.list_employees().await {
        Ok(records) => records,
        Err(err) => {
            eprintln!("{} ({})", err.message_or(LIST_FAILED), err);
            std::process::exit(1);
        }
    };

    println!("Fetched {} employees.", records.len());
    let today = today();
    let mut invalid = 0;
    for record in &records {
        let status = match validate(record, today) {
            Ok(()) => "ok".to_string(),
            Err(err) => {
                invalid += 1;
                err.to_string()
            }
        };
        println!(
            "{:<10} {:<24} {:<10} {:<12} {}",
            record.employee_id,
            record.name,
            record.department,
            format_join_date(&record.date_of_joining),
            status
        );
    }

    if invalid > 0 {
        println!("{} record(s) would be refused by the edit form.", invalid);
    } else {
        println!("Verification Complete.");
    }
    Ok(())
}

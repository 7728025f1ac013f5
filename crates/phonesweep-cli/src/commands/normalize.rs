use crate::commands::print_json;
use anyhow::Result;
use clap::Args;
use phonesweep_core::{normalize_phone, NormalizedValueDto, RawCell};

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Values to normalize, typed the same way as CSV cells
    #[arg(required = true)]
    pub values: Vec<String>,
}

pub fn normalize(json: bool, args: NormalizeArgs) -> Result<()> {
    let results: Vec<NormalizedValueDto> = args
        .values
        .into_iter()
        .map(|input| {
            let phone_number = normalize_phone(&RawCell::infer(&input));
            NormalizedValueDto {
                input,
                phone_number,
            }
        })
        .collect();

    if json {
        return print_json(&results);
    }

    for result in results {
        match result.phone_number {
            Some(phone) => println!("{}\t{}", result.input, phone),
            None => println!("{}\tinvalid", result.input),
        }
    }
    Ok(())
}

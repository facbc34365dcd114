use crate::domain::models::JsonOut;
use serde::Serialize;

fn emit<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        emit(data)?;
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        emit(&data)?;
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Status line for commands whose only output is an acknowledgement.
pub fn print_status(json: bool, message: &str) -> anyhow::Result<()> {
    if json {
        emit(serde_json::json!({ "message": message }))?;
    } else {
        println!("{message}");
    }
    Ok(())
}

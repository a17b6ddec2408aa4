/* 主流程 */
use std::io;
use std::process;

use log::info;

use tally::{try_tally, write_counts, Value};

fn main() {
    env_logger::init(); // 初始化日志

    let input: Vec<Value> = [1, 2, 2, 3].into_iter().map(Value::Int).collect();
    info!("tallying {} values", input.len());

    let counts = match try_tally(&input) {
        Ok(counts) => counts,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = write_counts(&counts, io::stdout().lock()) {
        eprintln!("Error writing counts: {}", e);
        process::exit(1);
    }
}

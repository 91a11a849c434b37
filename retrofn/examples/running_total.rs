//! Running total over a sample stream
//!
//! Chains a reporting consumer in front of an accumulating consumer and
//! feeds both a fixed sample stream. Run with logging enabled to see the
//! per-sample report:
//!
//!   RUST_LOG=debug cargo run --example running_total

use retrofn::{I64Consumer, Result};

fn main() -> Result<()> {
    env_logger::init();

    let samples: Vec<i64> = vec![12, -3, 40, 7, -1];

    let mut total = 0i64;
    let mut count = 0usize;

    {
        let report = |v: i64| -> Result<()> {
            log::debug!("sample: {}", v);
            Ok(())
        };
        let accumulate = |v: i64| -> Result<()> {
            total += v;
            count += 1;
            Ok(())
        };

        let mut chain = report.and_then(Some(accumulate))?;
        for &sample in &samples {
            chain.accept(sample)?;
        }
    }

    println!("samples:  {}", count);
    println!("total:    {}", total);
    println!(
        "average:  {:.2}",
        total as f64 / samples.len().max(1) as f64
    );

    Ok(())
}

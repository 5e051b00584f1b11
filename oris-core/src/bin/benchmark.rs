fn main() {
    if let Err(e) = run() {
        eprintln!("benchmark failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    use oris_core::{estimate_duration_secs, synthesize, synthesize_smoothed, synthesize_stream};
    use serde::Serialize;
    use std::path::PathBuf;
    use std::time::Instant;

    #[derive(Debug)]
    struct Args {
        iterations: usize,
        output: Option<PathBuf>,
    }

    #[derive(Debug, Clone, Serialize)]
    struct CaseResult {
        text: String,
        variant: String,
        iteration: usize,
        latency_us: f64,
        cues: usize,
        duration_secs: f64,
    }

    #[derive(Debug, Clone, Serialize)]
    struct VariantSummary {
        variant: String,
        runs: usize,
        p50_latency_us: f64,
        p95_latency_us: f64,
        avg_latency_us: f64,
    }

    #[derive(Debug, Clone, Serialize)]
    struct Summary {
        iterations: usize,
        total_runs: usize,
        variants: Vec<VariantSummary>,
        cases: Vec<CaseResult>,
    }

    fn parse_args() -> Result<Args, String> {
        let mut iterations: usize = 100;
        let mut output: Option<PathBuf> = None;

        let mut it = std::env::args().skip(1);
        while let Some(arg) = it.next() {
            match arg.as_str() {
                "--iterations" => {
                    let Some(v) = it.next() else {
                        return Err("missing value for --iterations".into());
                    };
                    iterations = v
                        .parse::<usize>()
                        .map_err(|_| "invalid value for --iterations".to_string())?
                        .clamp(1, 100_000);
                }
                "--output" => {
                    let Some(v) = it.next() else {
                        return Err("missing value for --output".into());
                    };
                    output = Some(PathBuf::from(v));
                }
                "--help" | "-h" => {
                    println!(
                        "Usage: cargo run -p oris-core --bin benchmark -- \\
  [--iterations <n>] [--output <file.json>]"
                    );
                    std::process::exit(0);
                }
                other => {
                    return Err(format!("unknown argument: {other}"));
                }
            }
        }

        Ok(Args { iterations, output })
    }

    fn percentile(values: &[f64], p: f64) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        if sorted.len() == 1 {
            return sorted[0];
        }
        let idx = ((sorted.len() - 1) as f64 * p.clamp(0.0, 1.0)).round() as usize;
        sorted[idx.min(sorted.len() - 1)]
    }

    fn summarize(variant: &str, rows: &[CaseResult]) -> VariantSummary {
        let latencies: Vec<f64> = rows.iter().map(|r| r.latency_us).collect();
        let avg = if latencies.is_empty() {
            0.0
        } else {
            latencies.iter().sum::<f64>() / latencies.len() as f64
        };
        VariantSummary {
            variant: variant.to_string(),
            runs: rows.len(),
            p50_latency_us: percentile(&latencies, 0.50),
            p95_latency_us: percentile(&latencies, 0.95),
            avg_latency_us: avg,
        }
    }

    const TEST_TEXTS: &[&str] = &[
        "Hello, I'm your AI assistant.",
        "The quick brown fox jumps over the lazy dog.",
        "Welcome to our digital human experience. I'm here to help you with any \
         questions you might have about our products and services.",
        "This is a longer piece of text designed to test the performance of the \
         lip sync generation system. It contains multiple sentences and various \
         punctuation marks, including commas, periods, and even some numbers \
         like 123 and special characters!",
    ];

    let args = parse_args()?;
    println!(
        "Running oris benchmark on {} texts (iterations={})",
        TEST_TEXTS.len(),
        args.iterations
    );

    let mut cases = Vec::new();
    for text in TEST_TEXTS {
        let duration_secs = estimate_duration_secs(text);

        for iteration in 1..=args.iterations {
            let started = Instant::now();
            let standard = synthesize(text, duration_secs);
            let standard_us = started.elapsed().as_secs_f64() * 1e6;
            cases.push(CaseResult {
                text: text.to_string(),
                variant: "standard".into(),
                iteration,
                latency_us: standard_us,
                cues: standard.mouth_cues.len(),
                duration_secs,
            });

            let started = Instant::now();
            let smoothed = synthesize_smoothed(text, duration_secs);
            let smoothed_us = started.elapsed().as_secs_f64() * 1e6;
            cases.push(CaseResult {
                text: text.to_string(),
                variant: "smoothed".into(),
                iteration,
                latency_us: smoothed_us,
                cues: smoothed.mouth_cues.len(),
                duration_secs,
            });

            let started = Instant::now();
            let streamed = synthesize_stream(text, duration_secs).count();
            let streamed_us = started.elapsed().as_secs_f64() * 1e6;
            cases.push(CaseResult {
                text: text.to_string(),
                variant: "stream".into(),
                iteration,
                latency_us: streamed_us,
                cues: streamed,
                duration_secs,
            });
        }

        let words = text.split_whitespace().count();
        println!(
            "\"{}{}\" — {words} words, {duration_secs:.2}s",
            &text[..text.len().min(50)],
            if text.len() > 50 { "..." } else { "" },
        );
    }

    let mut variants = Vec::new();
    for variant in ["standard", "smoothed", "stream"] {
        let rows: Vec<CaseResult> = cases
            .iter()
            .filter(|r| r.variant == variant)
            .cloned()
            .collect();
        variants.push(summarize(variant, &rows));
    }

    let summary = Summary {
        iterations: args.iterations,
        total_runs: cases.len(),
        variants,
        cases,
    };

    for v in &summary.variants {
        println!(
            "{:<10} p50={:.1}µs p95={:.1}µs avg={:.1}µs ({} runs)",
            v.variant, v.p50_latency_us, v.p95_latency_us, v.avg_latency_us, v.runs
        );
    }

    let json = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
    if let Some(out) = args.output {
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        std::fs::write(&out, json).map_err(|e| e.to_string())?;
        println!("Wrote benchmark report: {}", out.display());
    }

    Ok(())
}

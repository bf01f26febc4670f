fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse::<u64>())
        .transpose()?
        .unwrap_or(42);

    let cfg = covermesh::CoverConfig::default();
    let svg = covermesh::generate(&cfg, seed, None);

    let out_path = std::path::Path::new("target").join("cover.svg");
    std::fs::write(&out_path, svg)?;

    eprintln!("wrote {}", out_path.display());
    Ok(())
}

//! Reports composition statistics, reading frames and candidate proteins for
//! one DNA sequence.

mod display;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use rand::seq::SliceRandom;

use dnatoolkit::{
    codon_usage, count_nucleotides, gc_content, gc_content_windows, generate_reading_frames,
    load_sequence, round_to, BaseSequence, DnaSequence, Nucleotide, ProteinSearch, ReadingFrame,
    Residue,
};

use crate::display::paint;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Sequence file: FASTA (.fasta, .fa, .fna, .ffn) or plain text
    input: Option<PathBuf>,

    /// 0-based FASTA record to analyse
    #[arg(long, default_value_t = 0)]
    record: usize,

    /// Generate a random sequence of this length when no input is given
    #[arg(long, value_name = "LENGTH")]
    random: Option<usize>,

    /// First base of the window searched for proteins
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// End (exclusive) of the window searched for proteins; 0 searches everything
    #[arg(long, default_value_t = 0)]
    end: usize,

    /// Keep discovery order instead of sorting proteins by length
    #[arg(long)]
    unordered: bool,

    /// Residue whose codon usage is reported (`_` for stop)
    #[arg(long, default_value = "M", value_parser = parse_residue)]
    codon_usage: Residue,

    /// Window size for GC content of subsections
    #[arg(long, default_value_t = 5)]
    gc_window: usize,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

fn parse_residue(s: &str) -> Result<Residue, String> {
    match s.as_bytes() {
        &[b] => Residue::try_from(b).map_err(|e| e.to_string()),
        _ => Err(format!("expected a single residue letter, got {s:?}")),
    }
}

fn random_sequence(length: usize) -> DnaSequence {
    let mut rng = rand::thread_rng();
    (0..length)
        .filter_map(|_| Nucleotide::ALL.choose(&mut rng).copied())
        .collect()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let color = !args.no_color;

    let dna = match (&args.input, args.random) {
        (Some(path), _) => load_sequence(path, args.record)
            .with_context(|| format!("failed to load {}", path.display()))?,
        (None, Some(length)) => {
            info!("generating a random sequence of {length} nt");
            random_sequence(length)
        }
        (None, None) => bail!("either an input file or --random LENGTH is required"),
    };

    let text = dna.to_string();
    println!("\nSequence: {}\n", paint(&text, color));
    println!("[1] Sequence length: {}\n", dna.len());
    println!("[2] Nucleotide frequency: {}\n", count_nucleotides(&dna));
    println!(
        "[3] DNA/RNA transcription: {}\n",
        paint(&dna.transcribe().to_string(), color)
    );

    println!("[4] DNA string + complement + reverse complement:");
    println!("5' {} 3'", paint(&text, color));
    println!("   {}", "|".repeat(dna.len()));
    println!(
        "3' {} 5'  [complement]",
        paint(&dna.complement().to_string(), color)
    );
    println!(
        "5' {} 3'  [reverse complement]\n",
        paint(&dna.reverse_complement().to_string(), color)
    );

    match gc_content(&dna) {
        Some(gc) => println!("[5] GC content: {}%\n", round_to(gc, 2)),
        None => println!("[5] GC content: n/a\n"),
    }
    let windows: Vec<f64> = gc_content_windows(&dna, args.gc_window)
        .into_iter()
        .map(|gc| round_to(gc, 2))
        .collect();
    println!(
        "[6] GC content in subsections k={}: {:?}\n",
        args.gc_window, windows
    );

    println!("[7] Amino acids from DNA: {}\n", dna.translate(0));

    let usage: Vec<String> = codon_usage(&dna, args.codon_usage)
        .into_iter()
        .map(|(codon, fraction)| format!("{codon}: {}", round_to(fraction, 2)))
        .collect();
    println!(
        "[8] Codon frequency ({}): {{{}}}\n",
        args.codon_usage,
        usage.join(", ")
    );

    println!("[9] Reading frames:");
    for (frame, residues) in ReadingFrame::ALL.iter().zip(generate_reading_frames(&dna)) {
        println!("  {}. ({frame}) {residues}", frame.number());
    }

    let search = ProteinSearch::new(!args.unordered).with_window(args.start, args.end);
    let proteins = search.run(&dna);
    println!("\n[10] All proteins in 6 open reading frames:");
    for protein in &proteins {
        println!("  - {protein}");
    }
    info!("{} candidate protein(s)", proteins.len());

    Ok(())
}

//! Writes small but plausible versions of the five corpus CSVs under
//! `{DATA_PATH:-./data}/raw/` so the main binary has something to load.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use bookdata::config::resolve_data_root;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform integer in `lo..=hi`.
    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo + 1)
    }
}

const AUTHORS: [&str; 8] = [
    "Ursula K. Le Guin",
    "Frank Herbert",
    "Octavia E. Butler",
    "Iain M. Banks",
    "Stanislaw Lem",
    "Connie Willis",
    "Ted Chiang",
    "Ann Leckie",
];

const TAG_NAMES: [&str; 10] = [
    "fiction",
    "science-fiction",
    "fantasy",
    "classics",
    "to-buy",
    "favorites",
    "space-opera",
    "short-stories",
    "award-winners",
    "owned",
];

const BOOK_COUNT: u64 = 20;
const USER_COUNT: u64 = 30;

fn write_books(raw_dir: &Path, rng: &mut SimpleRng) -> Result<()> {
    let mut writer = csv::Writer::from_path(raw_dir.join("books.csv"))?;
    writer.write_record(["book_id", "goodreads_book_id", "authors", "title", "average_rating"])?;
    for book_id in 1..=BOOK_COUNT {
        let author = AUTHORS[(book_id as usize - 1) % AUTHORS.len()];
        let rating_tenths = rng.range(25, 48);
        writer.write_record([
            book_id.to_string(),
            (book_id * 1000).to_string(),
            author.to_string(),
            format!("Sample Book {book_id}"),
            format!("{}.{}", rating_tenths / 10, rating_tenths % 10),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_ratings(raw_dir: &Path, rng: &mut SimpleRng) -> Result<()> {
    let mut writer = csv::Writer::from_path(raw_dir.join("ratings.csv"))?;
    writer.write_record(["user_id", "book_id", "rating"])?;
    for _ in 0..200 {
        writer.write_record([
            rng.range(1, USER_COUNT).to_string(),
            rng.range(1, BOOK_COUNT).to_string(),
            rng.range(1, 5).to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_to_read(raw_dir: &Path, rng: &mut SimpleRng) -> Result<()> {
    let mut writer = csv::Writer::from_path(raw_dir.join("to_read.csv"))?;
    writer.write_record(["user_id", "book_id"])?;
    for _ in 0..50 {
        writer.write_record([
            rng.range(1, USER_COUNT).to_string(),
            rng.range(1, BOOK_COUNT).to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_book_tags(raw_dir: &Path, rng: &mut SimpleRng) -> Result<()> {
    let mut writer = csv::Writer::from_path(raw_dir.join("book_tags.csv"))?;
    writer.write_record(["goodreads_book_id", "tag_id", "count"])?;
    for book_id in 1..=BOOK_COUNT {
        for _ in 0..3 {
            writer.write_record([
                (book_id * 1000).to_string(),
                rng.range(0, TAG_NAMES.len() as u64 - 1).to_string(),
                rng.range(1, 500).to_string(),
            ])?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn write_tags(raw_dir: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(raw_dir.join("tags.csv"))?;
    writer.write_record(["tag_id", "tag_name"])?;
    for (tag_id, name) in TAG_NAMES.iter().enumerate() {
        writer.write_record([tag_id.to_string(), name.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let raw_dir = resolve_data_root().join("raw");
    fs::create_dir_all(&raw_dir)
        .with_context(|| format!("creating {}", raw_dir.display()))?;

    let mut rng = SimpleRng::new(42);

    write_books(&raw_dir, &mut rng)?;
    write_ratings(&raw_dir, &mut rng)?;
    write_to_read(&raw_dir, &mut rng)?;
    write_book_tags(&raw_dir, &mut rng)?;
    write_tags(&raw_dir)?;

    println!(
        "Wrote {} books, 200 ratings, 50 to-read entries, {} book tags and {} tags to {}",
        BOOK_COUNT,
        BOOK_COUNT * 3,
        TAG_NAMES.len(),
        raw_dir.display()
    );
    Ok(())
}

use anyhow::{Context, Result};

const OUTPUT_PATH: &str = "catalog.csv";
const ROWS: usize = 600;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const COUNTRIES: [&str; 8] = [
    "United States",
    "India",
    "United Kingdom",
    "Japan",
    "South Korea",
    "Spain",
    "France",
    "Mexico",
];

const RATINGS: [&str; 10] = [
    "TV-MA", "TV-14", "TV-PG", "R", "PG-13", "PG", "TV-Y7", "TV-Y", "NR", "G",
];

const MOVIE_GENRES: [&str; 6] = [
    "Dramas",
    "Comedies",
    "Documentaries",
    "Action & Adventure",
    "Dramas, International Movies",
    "Children & Family Movies",
];

const TV_GENRES: [&str; 5] = [
    "TV Dramas",
    "TV Comedies",
    "Crime TV Shows",
    "Kids' TV",
    "Reality TV",
];

const DIRECTORS: [&str; 12] = [
    "Ann Lee",
    "Rajiv Menon",
    "Sofia Delgado",
    "Kenji Watanabe",
    "Marta Kowalska",
    "Tom Okafor",
    "Lucia Ferrari",
    "Hana Kim",
    "Pierre Aubert",
    "Diego Ramos",
    "Ingrid Larsen",
    "Sam Whitfield",
];

const TITLE_ADJECTIVES: [&str; 10] = [
    "Silent", "Broken", "Midnight", "Golden", "Lost", "Crimson", "Hollow", "Distant", "Wild",
    "Paper",
];

const TITLE_NOUNS: [&str; 10] = [
    "Harbor", "Orbit", "Garden", "Signal", "Monsoon", "Avenue", "Kingdom", "Lantern", "Current",
    "Archive",
];

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

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }

    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo + 1)
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let mut writer = csv::Writer::from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;
    writer.write_record([
        "title",
        "type",
        "country",
        "rating",
        "listed_in",
        "director",
        "date_added",
        "duration",
    ])?;

    for i in 0..ROWS {
        let is_movie = rng.next_f64() < 0.7;
        let content_type = if is_movie { "Movie" } else { "TV Show" };

        let title = format!(
            "{} {}",
            rng.pick(&TITLE_ADJECTIVES),
            rng.pick(&TITLE_NOUNS)
        );

        let country = if rng.next_f64() < 0.9 {
            rng.pick(&COUNTRIES)
        } else {
            ""
        };
        let rating = if rng.next_f64() < 0.95 {
            rng.pick(&RATINGS)
        } else {
            ""
        };
        let listed_in = if is_movie {
            rng.pick(&MOVIE_GENRES)
        } else {
            rng.pick(&TV_GENRES)
        };
        let director = if rng.next_f64() < 0.85 {
            rng.pick(&DIRECTORS)
        } else {
            ""
        };

        // A small fraction of empty or malformed dates exercises the
        // loader's row-dropping path.
        let date_added = if i % 53 == 0 {
            String::new()
        } else if i % 37 == 0 {
            "Coming Soon".to_string()
        } else {
            let month = rng.range(0, 11) as usize;
            let day = rng.range(1, 28);
            let year = rng.range(2014, 2021);
            format!("{} {day}, {year}", MONTH_NAMES[month])
        };

        let duration = if is_movie {
            format!("{} min", rng.range(60, 150))
        } else {
            let seasons = rng.range(1, 7);
            if seasons == 1 {
                "1 Season".to_string()
            } else {
                format!("{seasons} Seasons")
            }
        };

        writer.write_record([
            title.as_str(),
            content_type,
            country,
            rating,
            listed_in,
            director,
            date_added.as_str(),
            duration.as_str(),
        ])?;
    }

    writer.flush().context("flushing csv")?;
    println!("Wrote {ROWS} titles to {OUTPUT_PATH}");
    Ok(())
}

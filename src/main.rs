use anyhow::Result;
use itertools::Itertools;
use log::{error, info};
use parking_lot::Mutex;
use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

mod game;
mod output;

use crate::game::catalog::{Catalog, Region};
use crate::game::map::{self, Geography, Highlight};
use crate::game::quiz::Selection;
use crate::game::quiz::{format_time, QuestionMode, Quiz, Settings};
use crate::game::QuizHandle;
use crate::output::terminal::TerminalOutput;

const USAGE: &str = "Answer with the option number (or type a country name in location quizzes).
Commands: `n` next question, `r` new quiz, `t` elapsed time, `m` map, `?term` search countries, `q` quit.";

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = env::args().skip(1);
    let mode: QuestionMode = args
        .next()
        .unwrap_or_else(|| "capitals".to_owned())
        .parse()?;
    let catalog_path = args.next().map(PathBuf::from);

    let settings = Settings::from_env()?;
    let catalog = Arc::new(Catalog::locate(catalog_path.as_deref())?);
    let output = TerminalOutput::new(catalog.clone(), mode);
    let quiz: QuizHandle<TerminalOutput> = Arc::new(Mutex::new(Quiz::new(
        catalog,
        mode,
        settings.clone(),
        output,
    )));

    println!("{}\n", USAGE);
    quiz.lock().begin()?;
    spawn_ticker(quiz.clone(), settings.tick_interval);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim();
        let mut quiz = quiz.lock();
        match command {
            "" => (),
            "q" => break,
            "n" => quiz.advance(),
            "r" => {
                // Failures are already reported through the output.
                quiz.restart().ok();
            }
            "t" => println!("🕒 {}\n", format_time(quiz.elapsed_seconds())),
            "m" => print_map(&quiz),
            term if term.starts_with('?') => print_search(quiz.catalog(), &term[1..]),
            answer => submit_answer(&mut quiz, answer),
        }
    }

    info!("Goodbye!");
    Ok(())
}

fn spawn_ticker(quiz: QuizHandle<TerminalOutput>, interval: Duration) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut last_tick = Instant::now();
        let mut source = quiz.lock().tick_source();
        loop {
            thread::sleep(interval);
            let now = Instant::now();
            let mut quiz = quiz.lock();
            // Time measured before a restart belongs to the previous session.
            if quiz.tick_source() == source {
                quiz.tick(now.duration_since(last_tick));
            }
            source = quiz.tick_source();
            last_tick = now;
        }
    })
}

fn submit_answer(quiz: &mut Quiz<TerminalOutput>, answer: &str) {
    let answer_result = if quiz.mode() == QuestionMode::Locations {
        let geography = quiz
            .catalog()
            .find_by_name(answer)
            .map(Geography::of)
            .unwrap_or_else(|| Geography::named(answer));
        quiz.answer_on_map(&geography)
    } else {
        let option = answer
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| quiz.current_question()?.options.get(i).cloned())
            .unwrap_or_else(|| answer.to_owned());
        quiz.answer(&option)
    };
    if answer_result.is_none() {
        println!("Nothing to answer right now.\n");
    }
}

fn print_search(catalog: &Catalog, term: &str) {
    let results = catalog.search(term);
    if results.is_empty() {
        println!("No country matches `{}`.\n", term.trim());
        return;
    }
    for country in results {
        let neighbors = catalog
            .neighbors(country)
            .iter()
            .map(|n| n.name.as_str())
            .join(", ");
        println!(
            "{} {} ({}), capital {}\n  {}\n  Neighbors: {}",
            country.flag,
            country.name,
            country.region,
            country.capital,
            country.description,
            if neighbors.is_empty() { "none" } else { neighbors.as_str() }
        );
        if let Some(fact) = country.facts.first() {
            println!("  Did you know? {}", fact);
        }
    }
    println!();
}

fn print_map(quiz: &Quiz<TerminalOutput>) {
    let catalog = quiz.catalog();
    let target = quiz
        .current_question()
        .and_then(|q| catalog.find(&q.country_id))
        .filter(|_| quiz.mode() == QuestionMode::Locations);
    let selected_id = match quiz.current_answer().map(|a| &a.selection) {
        Some(Selection::Region(id)) => Some(id.as_str()),
        _ => None,
    };
    let revealed = quiz.current_answer().is_some();

    for region in Region::all().iter() {
        let countries = catalog
            .in_region(*region)
            .iter()
            .map(|country| {
                let marker = match target {
                    Some(target) => {
                        let geography = Geography::of(country);
                        match map::highlight(&geography, target, selected_id, revealed) {
                            Highlight::Correct => "🟩",
                            Highlight::Wrong => "🟥",
                            Highlight::Selected => "🟦",
                            Highlight::Default => "",
                        }
                    }
                    None => "",
                };
                format!("{}{}", marker, country.name)
            })
            .join(", ");
        println!("{}: {}", region, countries);
    }
    println!();
}

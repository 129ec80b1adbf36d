use std::{env, io, io::prelude::*, path::PathBuf, process};

mod logging;

fn get_dataset_path() -> PathBuf {
    match env::args().nth(1) {
        None => {
            print!("Please, enter the path to the movie metadata CSV: ");
            io::stdout().flush().expect("could not flush stdout");
            let mut user_input = String::new();
            io::stdin()
                .read_line(&mut user_input)
                .expect("Failed to read user input");
            PathBuf::from(user_input.trim())
        }
        Some(path) => PathBuf::from(path),
    }
}

fn main() {
    logging::setup_logging();

    let dataset_path = get_dataset_path();
    let ranking = match reelrank::run(&dataset_path) {
        Ok(ranking) => ranking,
        Err(e) => {
            log::error!("Failed to rank directors: {}", e);
            process::exit(1);
        }
    };

    for (position, entry) in ranking.iter().enumerate() {
        println!(
            "{:>4}. {:<40} {:.1}",
            position + 1,
            entry.director,
            entry.average_score
        );
    }

    let report_file_name = "director_ranking.csv";
    match reelrank::CsvWriter::save_ranking_to_csv(&ranking, report_file_name) {
        Err(e) => log::error!("Error when saving ranking report: {}", e),
        _ => log::info!(
            "Successfully generated ranking file: {}",
            report_file_name
        ),
    }
}

use std::{
    env,
    fs::{read_to_string, write},
    path::PathBuf,
    time::Instant,
};

use basic_lexer::{display_error, lexer::lexer::Lexer};

fn main() {
    let args: Vec<String> = env::args().collect();

    let file_path = match args.get(1).filter(|arg| *arg != "--debug") {
        Some(path) => PathBuf::from(path),
        None => {
            let dir = env::var("PATHTOTESTFILES")
                .expect("No source file given and PATHTOTESTFILES is not set!");
            PathBuf::from(dir).join("task_1.txt")
        }
    };

    let result_path = match args.get(2).filter(|arg| *arg != "--debug") {
        Some(path) => PathBuf::from(path),
        None => file_path.with_file_name("res_lex.txt"),
    };

    let source = read_to_string(&file_path).expect("Failed to read file!");

    let start = Instant::now();

    let mut lexer = Lexer::new(source.clone());
    if let Err(error) = lexer.run() {
        display_error(&error, &source, &file_path);
        println!("unparsed part: {}", error.unparsed_remainder(&source));
    }

    println!("Tokenized in {:?}", start.elapsed());

    // Partial results are still written when the scan failed.
    let rendered = lexer
        .tokens()
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<String>>()
        .join("\n");
    write(&result_path, rendered).expect("Failed to write result file!");

    if args.iter().any(|arg| arg == "--debug") {
        for token in lexer.tokens() {
            token.debug();
        }
    }
}

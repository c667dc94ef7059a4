use ariadne::{ColorGenerator, Label, Report, Source};
use clap::Parser as ClapParser;
use lithir::{context::Context, dialects, parser::parse_attribute, utils::Error};

#[derive(ClapParser)]
pub struct Arguments {
    /// Path to the input file
    input: String,
}

fn main() {
    let args = Arguments::parse();

    let mut ctx = Context::new();
    dialects::install_standard(&mut ctx).expect("standard dialects failed to install");

    let mut colors = ColorGenerator::new();
    let a = colors.next();

    let source = match std::fs::read_to_string(&args.input) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Cannot read {}: {}", args.input, error);
            std::process::exit(1);
        }
    };

    match parse_attribute(&ctx, &source) {
        Ok(attr) => {
            if let Err(error) = ctx.verify(&attr) {
                eprintln!("Parsed attribute failed verification: {}", error);
                std::process::exit(1);
            }

            println!("Successfully parsed an attribute from {}", args.input);
            println!("{}", attr);
        }
        Err(Error::Syntax { errors }) => {
            eprintln!("Failed to parse an attribute from {}:", args.input);

            for issue in errors {
                let span = (args.input.clone(), issue.start..issue.end);

                Report::build(ariadne::ReportKind::Error, span.clone())
                    .with_message(&issue.message)
                    .with_label(
                        Label::new(span)
                            .with_message("The error occurred here")
                            .with_color(a),
                    )
                    .finish()
                    .print((args.input.clone(), Source::from(source.clone())))
                    .unwrap();
            }
            std::process::exit(1);
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    }
}

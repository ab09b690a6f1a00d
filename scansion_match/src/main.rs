// Singability checker — CLI entry point.
//
// Evaluates a built-in list of demo phrases against a named stress template
// and prints the ones that cannot be sung to it, with a summary count.
// Phrases are checked in parallel; output stays in list order.
//
// Usage:
//   singability [OPTIONS]
//     --template <NAME>   Template to check against (default: tmnt)
//     --all-templates     Check every shipped template in turn
//     --verbose           Also print singable phrases and stress details

use scansion_dict::default_dictionary;
use scansion_match::{OverrideTable, check_all, stress_description};
use scansion_stress::{NamedTemplate, default_templates};

const DEMO_PHRASES: [&str; 20] = [
    "teenage mutant ninja turtles",
    "common wordplay indicator",
    "first time dyson air wrap users",
    "call yourself a people pleaser",
    "gender non conforming parent",
    "dirty diet doctor pepper",
    "in-house caesar salad dressing",
    "cozy skillet dinner season",
    "perfect new york politician",
    "english is my second language",
    "peel off that adhesive backing",
    "decimate your top performers",
    "age-old bumper sticker question",
    "very grumpy climate kitty",
    "this is how my cat is sitting",
    "I just ate the Wednesday whopper",
    "un-ironic white nerd anthem",
    "bold, autumnal aspen yellow",
    "poop too long and take my nuggets",
    "very good pronunciation",
];

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose");
    let all_templates = args.iter().any(|a| a == "--all-templates");
    let template_name = parse_flag(&args, "--template").unwrap_or_else(|| "tmnt".to_string());

    let templates = default_templates();
    let dictionary = default_dictionary();
    let overrides = OverrideTable::standard();

    let selected: Vec<&NamedTemplate> = if all_templates {
        templates.all().iter().collect()
    } else {
        match templates.get(&template_name) {
            Some(template) => vec![template],
            None => {
                eprintln!(
                    "Unknown template '{template_name}'. Available: {}",
                    templates.names().join(", ")
                );
                std::process::exit(1);
            }
        }
    };

    for template in selected {
        println!("=== {} ({}) ===", template.name, template.pattern);
        let reports = check_all(&DEMO_PHRASES, &template.pattern, &dictionary, &overrides);
        let mut singable = 0;
        for report in &reports {
            if report.is_singable() {
                singable += 1;
                if verbose {
                    println!("{} is singable: {}", report.phrase, report.choice_summary());
                }
            } else {
                println!("{} is not singable", report.phrase);
                if verbose {
                    println!(
                        "  {} (first-choice stresses: {})",
                        report.verdict,
                        stress_description(&report.phrase, &dictionary)
                    );
                }
            }
        }
        println!("{singable} of {} phrases singable", reports.len());
        println!();
    }
}

/// Find `flag` in the argument list and return the value that follows it.
fn parse_flag(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

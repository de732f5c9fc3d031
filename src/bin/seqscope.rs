use clap::Parser;
use seqscope::catalog::{Catalog, Category, CategoryFiles};
use seqscope::classify::{self, Classification};
use seqscope::glossary::Glossary;
use seqscope::sequence;
use seqscope::suggest::{self, SuggestionOutcome};
use seqscope::topk;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seqscope", version, about = "Sequence-pattern support and recommendation engine")]
struct Cli {
    /// Mined pattern file for the Distinction category
    #[arg(long = "distinction")]
    distinction: PathBuf,
    /// Mined pattern file for the Pass category
    #[arg(long = "pass-file")]
    pass: PathBuf,
    /// Mined pattern file for the Fail category
    #[arg(long = "fail")]
    fail: PathBuf,
    /// Mined pattern file for the Withdrawn category
    #[arg(long = "withdrawn")]
    withdrawn: PathBuf,

    /// Activities for one day, space-separated. May be repeated, one per day.
    #[arg(long = "day")]
    day: Vec<String>,

    /// Max suggested improvement patterns
    #[arg(long = "limit", default_value_t = suggest::DEFAULT_LIMIT)]
    limit: usize,

    /// Top k patterns per category in the ranking tables
    #[arg(long = "top", default_value_t = 5)]
    top: usize,
    /// Minimum number of days a ranked pattern must span
    #[arg(long = "min-days", default_value_t = 1)]
    min_days: usize,

    /// JSON file mapping activity tokens to descriptions
    #[arg(long = "glossary")]
    glossary: Option<PathBuf>,

    /// Output format: json | table
    #[arg(long = "format", default_value = "json")]
    format: String,
}

#[derive(Debug, serde::Serialize)]
struct RankingOut {
    category: Category,
    patterns: Vec<RankedOut>,
}

#[derive(Debug, serde::Serialize)]
struct RankedOut {
    sequence: String,
    support: u64,
}

#[derive(Debug, serde::Serialize)]
struct EvaluationOut {
    candidate: String,
    classification: Classification,
    suggestions: SuggestionsOut,
}

#[derive(Debug, serde::Serialize)]
#[serde(tag = "outcome")]
enum SuggestionsOut {
    Suggestions { suggestions: Vec<SuggestionOut> },
    NoImprovementPath,
}

#[derive(Debug, serde::Serialize)]
struct SuggestionOut {
    sequence: String,
    category: Category,
    support: u64,
}

#[derive(Debug, serde::Serialize)]
struct Output {
    activities: Vec<String>,
    #[serde(skip_serializing_if = "Glossary::is_empty")]
    glossary: Glossary,
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluation: Option<EvaluationOut>,
    rankings: Vec<RankingOut>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let files = CategoryFiles {
        distinction: cli.distinction.clone(),
        pass: cli.pass.clone(),
        fail: cli.fail.clone(),
        withdrawn: cli.withdrawn.clone(),
    };
    let catalog = Catalog::load(&files)?;

    let glossary = match &cli.glossary {
        Some(path) => Glossary::from_file(path)?,
        None => Glossary::default(),
    };

    let evaluation = if cli.day.is_empty() {
        None
    } else {
        let candidate = sequence::from_days(&cli.day);
        let classification = classify::classify(&candidate, &catalog);
        let suggestions = match suggest::suggest(&candidate, &catalog, cli.limit) {
            SuggestionOutcome::NoImprovementPath => SuggestionsOut::NoImprovementPath,
            SuggestionOutcome::Suggestions { suggestions } => SuggestionsOut::Suggestions {
                suggestions: suggestions
                    .into_iter()
                    .map(|s| SuggestionOut {
                        sequence: sequence::format(&s.sequence),
                        category: s.category,
                        support: s.support,
                    })
                    .collect(),
            },
        };
        Some(EvaluationOut {
            candidate: sequence::format(&candidate),
            classification,
            suggestions,
        })
    };

    let rankings: Vec<RankingOut> = Category::ALL
        .iter()
        .map(|&category| RankingOut {
            category,
            patterns: topk::top_k(&catalog, category, cli.top, cli.min_days)
                .into_iter()
                .map(|p| RankedOut {
                    sequence: sequence::format(&p.sequence),
                    support: p.support,
                })
                .collect(),
        })
        .filter(|r| !r.patterns.is_empty())
        .collect();

    let out = Output {
        activities: catalog.all_activities().to_vec(),
        glossary,
        evaluation,
        rankings,
    };

    if cli.format == "table" {
        print_tables(&out, cli.top, cli.min_days);
    } else {
        println!("{}", serde_json::to_string_pretty(&out)?);
    }
    Ok(())
}

fn print_tables(out: &Output, top: usize, min_days: usize) {
    println!("Available activities: {}", out.activities.join(", "));

    if !out.glossary.is_empty() {
        println!("\n{:<12} Description", "Activity");
        for (activity, description) in out.glossary.entries() {
            println!("{activity:<12} {description}");
        }
    }

    if let Some(eval) = &out.evaluation {
        println!("\nSelected sequence: {}", eval.candidate);
        match &eval.classification {
            Classification::NoData => {
                println!("No support data available for this sequence.");
            }
            Classification::Classified {
                dominant,
                breakdown,
            } => {
                println!("{:<12} {:<8} {}", "Category", "Support", "Percentage");
                for row in breakdown {
                    println!(
                        "{:<12} {:<8} {:.2}%",
                        row.category.as_str(),
                        row.support,
                        row.percentage
                    );
                }
                println!("The sequence is most associated with the {dominant} category.");
            }
        }
        match &eval.suggestions {
            SuggestionsOut::NoImprovementPath => {
                println!("No improvement path towards Pass or Distinction.");
            }
            SuggestionsOut::Suggestions { suggestions } => {
                println!("\nSuggested improvements:");
                for s in suggestions {
                    println!("- {} (Category: {}, Support: {})", s.sequence, s.category, s.support);
                }
            }
        }
    }

    for ranking in &out.rankings {
        println!(
            "\nTop {top} sequences in {} with >= {min_days} days",
            ranking.category
        );
        println!("{:<8} Sequence", "Support");
        for p in &ranking.patterns {
            println!("{:<8} {}", p.support, p.sequence);
        }
    }
}

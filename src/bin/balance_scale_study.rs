use std::path::Path;

use anyhow::Result;
use maud::html;

use seesaw_classifiers::config::StudyConfig;
use seesaw_classifiers::io::{generate_balance_scale, read_balance_scale};
use seesaw_classifiers::report::plots::{plot_roc_curve, plot_score_histogram};
use seesaw_classifiers::report::{Report, ReportSection};
use seesaw_classifiers::study::{ImbalanceStudy, Strategy, StudyReport};

const DATA_PATH: &str = "data/balance-scale.data";
const REPORT_PATH: &str = "report.html";

fn main() -> Result<()> {
    env_logger::init();

    let data_path = Path::new(DATA_PATH);
    let dataset = if data_path.exists() {
        log::info!("Loading {}", data_path.display());
        read_balance_scale(data_path)?
    } else {
        log::info!("No data file at {}; generating the canonical dataset", DATA_PATH);
        generate_balance_scale()?
    };

    let study = ImbalanceStudy::new(StudyConfig::default());
    let report = study.run(&dataset)?;
    report.log_summary();

    write_html_report(&report)?;
    println!("Report saved to {}", REPORT_PATH);

    Ok(())
}

fn write_html_report(report: &StudyReport) -> Result<()> {
    let mut html_report = Report::new(
        "Balance-scale imbalance study",
        "Five remediation strategies compared on the balance-scale dataset",
    );

    let mut overview = ReportSection::new("Overview");
    overview.add_content(html! {
        table border="1" cellpadding="4" {
            tr {
                th { "Strategy" }
                th { "Model" }
                th { "Rows" }
                th { "Accuracy" }
                th { "AUROC" }
            }
            @for outcome in &report.outcomes {
                tr {
                    td { (outcome.strategy.to_string()) }
                    td { (outcome.model_name) }
                    td { (outcome.train_rows.to_string()) }
                    td { (format!("{:.4}", outcome.accuracy)) }
                    td {
                        @match &outcome.auroc {
                            Some(auroc) => { (format!("{:.4}", auroc.auroc)) }
                            None => { "-" }
                        }
                    }
                }
            }
        }
    });
    overview.add_content(html! {
        p {
            "Baseline AUROC rescored on the downsampled frame: "
            (format!("{:.4}", report.baseline_auroc_on_downsampled.auroc))
            @if report.baseline_auroc_on_downsampled.inverted {
                " (probability column inverted)"
            }
        }
    });
    html_report.add_section(overview);

    for strategy in [Strategy::DownsampleMajority, Strategy::TreeEnsemble] {
        if let Some(outcome) = report.outcome(strategy) {
            let mut section = ReportSection::new(&format!("Strategy: {}", strategy));
            let histogram = plot_score_histogram(
                &outcome.probabilities,
                &outcome.labels,
                &format!("{} score distribution", outcome.model_name),
            )
            .map_err(anyhow::Error::msg)?;
            section.add_plot(histogram);

            match plot_roc_curve(
                &outcome.labels,
                &outcome.probabilities,
                &format!("{} ROC curve", outcome.model_name),
            ) {
                Ok(roc) => section.add_plot(roc),
                Err(err) => log::warn!("Skipping ROC plot for {}: {}", strategy, err),
            }
            html_report.add_section(section);
        }
    }

    html_report.save_to_file(REPORT_PATH)
}

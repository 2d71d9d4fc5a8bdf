use surveydash::{ChartSink, ChartUpdate, Controller, SurveyConfig, SurveyData};

struct StdoutSink;

impl ChartSink for StdoutSink {
  fn publish(&mut self, update: ChartUpdate) {
    match update {
      ChartUpdate::WorkPreference(counts) => {
        println!("work preference in {}:", counts.country);
        for entry in &counts.counts {
          println!("  {:<40} {}", entry.category, entry.count);
        }
      }
      ChartUpdate::Languages(languages) => {
        println!("top languages in {} ({}):", languages.country, languages.remote_pref);
        for entry in &languages.counts {
          println!("  {:<20} {}", entry.category, entry.count);
        }
      }
      ChartUpdate::Compensation(Some(sample)) => {
        println!(
          "compensation sample in {} (>= {} years): {} points",
          sample.country,
          sample.min_years,
          sample.points.len()
        );
      }
      ChartUpdate::Compensation(None) => {
        println!("no compensation data for this selection");
      }
      ChartUpdate::Trend(Some(trend)) => {
        println!("work preference by experience in {}:", trend.country);
        for point in &trend.points {
          println!(
            "  {:<6} hybrid {:.2}  in-person {:.2}  remote {:.2}",
            point.bucket, point.hybrid, point.in_person, point.remote
          );
        }
      }
      ChartUpdate::Trend(None) => {
        println!("no trend data for this selection");
      }
    }
  }
}

fn main() -> surveydash::Result<()> {
  tracing_subscriber::fmt::init();

  let path = std::env::args().nth(1).unwrap_or_else(|| "survey_results_public.csv".to_string());
  let data = SurveyData::load(SurveyConfig::new(path))?;

  let countries = data.countries().to_vec();
  let mut controller = Controller::new(data, StdoutSink)?;

  if let Some(country) = countries.get(1) {
    println!("\n-- switching to {country} --\n");
    controller.set_country(country)?;
  }

  println!("\n-- requiring 10+ years of experience --\n");
  controller.set_min_years(10)?;

  Ok(())
}

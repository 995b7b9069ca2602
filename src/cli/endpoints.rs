//! # Endpoints Command
//!
//! Lists the endpoint table with each endpoint's parameter schema.

use anyhow::Result;
use clap::Args;
use sprig_core::output::{format_dimmed, format_method, print_warning};
use sprig_jira::params::Field;
use sprig_jira::{ENDPOINTS, Endpoint, ParamLocation, ParamType, endpoint};
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Command for listing endpoints
#[derive(Args)]
pub struct EndpointsArgs {
  /// Show only this endpoint, with one row per parameter
  #[arg(index = 1)]
  pub name: Option<String>,
}

#[derive(Tabled)]
struct EndpointRow {
  #[tabled(rename = "Endpoint")]
  name: String,
  #[tabled(rename = "Method")]
  method: String,
  #[tabled(rename = "Path")]
  path: String,
  #[tabled(rename = "Params In")]
  location: String,
  #[tabled(rename = "Parameters")]
  params: String,
}

#[derive(Tabled)]
struct FieldRow {
  #[tabled(rename = "Parameter")]
  name: String,
  #[tabled(rename = "Type")]
  accepts: String,
  #[tabled(rename = "Required")]
  required: String,
  #[tabled(rename = "Default")]
  default: String,
}

/// Handle the endpoints command
pub(crate) fn handle_endpoints_command(args: &EndpointsArgs) -> Result<()> {
  match &args.name {
    Some(name) => {
      let endpoint = endpoint(name)
        .ok_or_else(|| anyhow::anyhow!("Unknown endpoint '{name}'. Run 'sprig endpoints' to list them."))?;
      print_endpoint(endpoint);
    }
    None => {
      let rows: Vec<EndpointRow> = ENDPOINTS.iter().map(|endpoint| endpoint_row(endpoint)).collect();
      println!("{}", Table::new(rows).with(Style::sharp()));
    }
  }

  Ok(())
}

fn endpoint_row(endpoint: &Endpoint) -> EndpointRow {
  let name = if endpoint.implemented {
    endpoint.name.to_string()
  } else {
    format!("{} (not implemented)", endpoint.name)
  };

  EndpointRow {
    name,
    method: endpoint.method.to_string(),
    path: endpoint.path.to_string(),
    location: location_label(endpoint.location).to_string(),
    params: endpoint
      .schema
      .fields
      .iter()
      .map(field_summary)
      .collect::<Vec<_>>()
      .join(", "),
  }
}

fn print_endpoint(endpoint: &Endpoint) {
  println!(
    "{} {} {}",
    format_method(endpoint.method.as_str()),
    endpoint.path,
    format_dimmed(&format!("({})", endpoint.schema.name))
  );
  if !endpoint.implemented {
    print_warning("This endpoint is not implemented.");
  }

  if endpoint.schema.fields.is_empty() {
    println!("  No parameters");
    return;
  }

  let rows: Vec<FieldRow> = endpoint
    .schema
    .fields
    .iter()
    .map(|field| FieldRow {
      name: field.name.to_string(),
      accepts: accepted_types(field),
      required: if field.required { "yes" } else { "no" }.to_string(),
      default: field.default.map(|d| d.to_string()).unwrap_or_default(),
    })
    .collect();
  println!(
    "Parameters travel in the {}",
    match endpoint.location {
      ParamLocation::Query => "query string",
      ParamLocation::Body => "JSON body",
    }
  );
  println!("{}", Table::new(rows).with(Style::sharp()));
}

const fn location_label(location: ParamLocation) -> &'static str {
  match location {
    ParamLocation::Query => "query",
    ParamLocation::Body => "body",
  }
}

fn accepted_types(field: &Field) -> String {
  if field.accepts == ParamType::ANY {
    return "any".to_string();
  }
  field
    .accepts
    .iter()
    .map(|accepted| accepted.as_str())
    .collect::<Vec<_>>()
    .join("|")
}

/// `name`, `name*` for required fields, `name=default` when defaulted
fn field_summary(field: &Field) -> String {
  match (field.required, field.default) {
    (_, Some(default)) => format!("{}={default}", field.name),
    (true, None) => format!("{}*", field.name),
    (false, None) => field.name.to_string(),
  }
}

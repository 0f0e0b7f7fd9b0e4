//! Handler for the `rules` command.

use crate::error::Result;
use crate::linter::rules::rule_definitions;

/// Print the rule table, either human-readable or as JSON.
pub fn handle_rules(json: bool) -> Result<()> {
    let definitions = rule_definitions();

    if json {
        println!("{}", serde_json::to_string_pretty(&definitions)?);
        return Ok(());
    }

    for def in &definitions {
        println!(
            "{}  {:<34} {:<8} {:<12} {}",
            def.code, def.name, def.severity, def.category, def.description
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_rules() {
        assert!(handle_rules(false).is_ok());
        assert!(handle_rules(true).is_ok());
    }
}

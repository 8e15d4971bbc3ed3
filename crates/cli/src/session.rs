//! The interactive menu loop.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use rust_decimal::Decimal;
use tracing::{debug, error, info};

use stockledger_inventory::{Ledger, LedgerError, ProductFields, ProductId, Record};

use crate::config::CliConfig;
use crate::prompt::Prompter;
use crate::render;

const BANNER: &str = "-------------------------------------------\n\
                      Inventory Management System - Interactive\n\
                      -------------------------------------------";

const MENU: &str = "\nPlease choose an option:\n\
                    1. Add a product\n\
                    2. Remove a product\n\
                    3. Find a product\n\
                    4. Update a product\n\
                    5. View all products\n\
                    6. Save inventory to file\n\
                    7. Load inventory from file\n\
                    8. Display total value and profit\n\
                    Q. Quit";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Find,
    Update,
    ViewAll,
    Save,
    Load,
    Totals,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Remove),
            "3" => Some(MenuChoice::Find),
            "4" => Some(MenuChoice::Update),
            "5" => Some(MenuChoice::ViewAll),
            "6" => Some(MenuChoice::Save),
            "7" => Some(MenuChoice::Load),
            "8" => Some(MenuChoice::Totals),
            "q" | "Q" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One interactive session over a single, explicitly owned ledger.
pub struct Session<R, W> {
    ledger: Ledger,
    config: CliConfig,
    io: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(ledger: Ledger, config: CliConfig, input: R, output: W) -> Self {
        Self {
            ledger,
            config,
            io: Prompter::new(input, output),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_parts(self) -> (Ledger, W) {
        (self.ledger, self.io.into_output())
    }

    /// Load the configured default file if autoload is on and it exists.
    pub fn autoload(&mut self) -> Result<()> {
        if !self.config.autoload {
            return Ok(());
        }
        let path = self.config.default_file.clone();
        if !path.exists() {
            info!(path = %path.display(), "autoload file not found, starting empty");
            return Ok(());
        }
        self.load_from(&path)
    }

    /// Run the menu until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.io.output(), "{BANNER}")?;

        loop {
            writeln!(self.io.output(), "{MENU}")?;
            let Some(answer) = self.io.line("> ")? else {
                break;
            };

            let Some(choice) = MenuChoice::parse(&answer) else {
                writeln!(self.io.output(), "Invalid choice. Please try again.")?;
                continue;
            };
            debug!(?choice, "menu choice");

            let flow = match choice {
                MenuChoice::Add => self.add()?,
                MenuChoice::Remove => self.remove()?,
                MenuChoice::Find => self.find()?,
                MenuChoice::Update => self.update()?,
                MenuChoice::ViewAll => {
                    render::listing(self.io.output(), &self.ledger)?;
                    Flow::Continue
                }
                MenuChoice::Save => self.save()?,
                MenuChoice::Load => self.load()?,
                MenuChoice::Totals => {
                    render::totals(self.io.output(), self.ledger.totals())?;
                    Flow::Continue
                }
                MenuChoice::Quit => {
                    writeln!(self.io.output(), "Goodbye!")?;
                    Flow::Exit
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        self.io.output().flush()?;
        Ok(())
    }

    fn add(&mut self) -> Result<Flow> {
        let Some(id) = self.io.parsed::<ProductId>("Enter ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(fields) = self.read_fields("")? else {
            return Ok(Flow::Exit);
        };

        match self.ledger.add(Record::new(id, fields)) {
            Ok(()) => writeln!(self.io.output(), "Product added successfully.")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> Result<Flow> {
        let Some(id) = self.io.parsed::<ProductId>("Enter product id to remove: ")? else {
            return Ok(Flow::Exit);
        };

        match self.ledger.remove(id) {
            Ok(_) => writeln!(self.io.output(), "Product removed successfully.")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn find(&mut self) -> Result<Flow> {
        let Some(id) = self.io.parsed::<ProductId>("Enter product id to find: ")? else {
            return Ok(Flow::Exit);
        };

        match self.ledger.find(id) {
            Some(found) => {
                writeln!(self.io.output(), "--- Product Found ---")?;
                render::record(self.io.output(), &found)?;
            }
            None => writeln!(self.io.output(), "Product not found.")?,
        }
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> Result<Flow> {
        let Some(id) = self
            .io
            .parsed::<ProductId>("Enter the product id to update: ")?
        else {
            return Ok(Flow::Exit);
        };
        if !self.ledger.contains(id) {
            self.report(&LedgerError::not_found(id))?;
            return Ok(Flow::Continue);
        }
        let Some(fields) = self.read_fields("new ")? else {
            return Ok(Flow::Exit);
        };

        match self.ledger.update(id, fields) {
            Ok(()) => writeln!(self.io.output(), "Product updated successfully.")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn save(&mut self) -> Result<Flow> {
        let Some(path) = self.read_path("save")? else {
            return Ok(Flow::Exit);
        };

        match self.ledger.save(&path) {
            Ok(()) => writeln!(self.io.output(), "Inventory saved to file.")?,
            Err(e) => {
                error!(path = %path.display(), error = %e, "save failed");
                writeln!(self.io.output(), "Error saving inventory: {e}")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn load(&mut self) -> Result<Flow> {
        let Some(path) = self.read_path("load")? else {
            return Ok(Flow::Exit);
        };
        self.load_from(&path)?;
        Ok(Flow::Continue)
    }

    fn load_from(&mut self, path: &Path) -> Result<()> {
        match self.ledger.load(path) {
            Ok(report) => {
                let out = self.io.output();
                writeln!(
                    out,
                    "Inventory loaded from file: {} products, {} lines skipped.",
                    self.ledger.len(),
                    report.skipped_count()
                )?;
                for skipped in &report.skipped {
                    writeln!(out, "  skipped {skipped}")?;
                }
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "load failed");
                writeln!(
                    self.io.output(),
                    "Error: could not open file {}: {e}",
                    path.display()
                )?;
            }
        }
        Ok(())
    }

    /// Prompts for the five mutable fields. `qualifier` is "" or "new ".
    fn read_fields(&mut self, qualifier: &str) -> Result<Option<ProductFields>> {
        let Some(name) = self.io.line(&format!("Enter {qualifier}product name: "))? else {
            return Ok(None);
        };
        let Some(category) = self
            .io
            .line(&format!("Enter {qualifier}product category: "))?
        else {
            return Ok(None);
        };
        let Some(price) = self
            .io
            .parsed::<Decimal>(&format!("Enter {qualifier}product price: Rs. "))?
        else {
            return Ok(None);
        };
        let Some(quantity) = self
            .io
            .parsed::<i64>(&format!("Enter {qualifier}product quantity: "))?
        else {
            return Ok(None);
        };
        let Some(margin) = self
            .io
            .parsed::<Decimal>(&format!("Enter {qualifier}profit margin (%): "))?
        else {
            return Ok(None);
        };

        Ok(Some(ProductFields::new(name, category, price, quantity, margin)))
    }

    fn read_path(&mut self, verb: &str) -> Result<Option<PathBuf>> {
        let prompt = format!(
            "Enter filename to {verb} inventory [{}]: ",
            self.config.default_file.display()
        );
        let Some(answer) = self.io.line(&prompt)? else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(Some(self.config.default_file.clone()));
        }
        Ok(Some(PathBuf::from(answer)))
    }

    fn report(&mut self, err: &LedgerError) -> Result<()> {
        debug!(error = %err, "operation rejected");
        let out = self.io.output();
        match err {
            LedgerError::DuplicateKey(_) => writeln!(out, "Id already exists.")?,
            LedgerError::NotFound(_) => writeln!(out, "Id does not exist.")?,
            other => writeln!(out, "Error: {other}")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 8 "), Some(MenuChoice::Totals));
        assert_eq!(MenuChoice::parse("q"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("Q"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("9"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }
}

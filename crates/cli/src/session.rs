//! Text-menu loop driving an [`Inventory`].

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use stockbook_inventory::{ArticleUpdate, FieldOutcome, Inventory, NameLookup};

use crate::input::{self, InputError};
use crate::table;

const MENU: &str = "\
=== Inventory Management ===
1. Add article
2. Update article
3. Delete article
4. Show inventory
5. Search article by name
6. Exit";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum MenuOption {
    Add,
    Update,
    Delete,
    Show,
    Search,
    Exit,
}

impl MenuOption {
    fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(MenuOption::Add),
            "2" => Some(MenuOption::Update),
            "3" => Some(MenuOption::Delete),
            "4" => Some(MenuOption::Show),
            "5" => Some(MenuOption::Search),
            "6" => Some(MenuOption::Exit),
            _ => None,
        }
    }
}

/// One interactive session: owns the inventory for its whole lifetime.
pub struct Session<R, W> {
    inventory: Inventory,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            inventory: Inventory::new(),
            input,
            output,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu until the user exits or input closes.
    pub fn run(&mut self) -> io::Result<()> {
        info!("session started");

        loop {
            writeln!(self.output, "\n{MENU}")?;
            let choice = match self.prompt("Select an option: ") {
                Ok(choice) => choice,
                Err(InputError::EndOfInput) => break,
                Err(InputError::Io(e)) => return Err(e),
                Err(other) => {
                    writeln!(self.output, "Error: {other}")?;
                    continue;
                }
            };

            let Some(option) = MenuOption::from_choice(&choice) else {
                writeln!(self.output, "Invalid option. Please choose a valid option.")?;
                continue;
            };
            debug!(?option, "menu option selected");

            let result = match option {
                MenuOption::Add => self.add(),
                MenuOption::Update => self.update(),
                MenuOption::Delete => self.delete(),
                MenuOption::Show => self.show(),
                MenuOption::Search => self.search(),
                MenuOption::Exit => {
                    writeln!(self.output, "Exiting.")?;
                    break;
                }
            };

            match result {
                Ok(()) => {}
                Err(InputError::EndOfInput) => break,
                Err(InputError::Io(e)) => return Err(e),
                Err(other) => writeln!(self.output, "Error: {other}")?,
            }
        }

        self.output.flush()?;
        info!(articles = self.inventory.len(), "session ended");
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<String, InputError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn add(&mut self) -> Result<(), InputError> {
        let name = self.prompt("Article name: ")?;
        let category = self.prompt("Article category: ")?;
        let price = input::parse_price(&self.prompt("Unit price in € (use '.' for decimals): ")?)?;
        let stock = input::parse_stock(&self.prompt("Stock quantity: ")?)?;

        match self.inventory.add(name, category, price, stock) {
            Ok(id) => {
                let rendered = self
                    .inventory
                    .find_by_id(id)
                    .map(|a| a.render())
                    .unwrap_or_default();
                writeln!(self.output, "Article added with ID {id}: {rendered}")?;
            }
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(())
    }

    fn update(&mut self) -> Result<(), InputError> {
        let id = input::parse_id(&self.prompt("ID of the article to update: ")?)?;
        let name = self.prompt("New name (leave blank to keep it): ")?;
        let price = self.prompt("New unit price in € (leave blank to keep it): ")?;
        let stock = self.prompt("New stock quantity (leave blank to keep it): ")?;

        let changes = ArticleUpdate {
            name: input::non_blank(&name).map(str::to_string),
            price: input::non_blank(&price).map(input::parse_price).transpose()?,
            stock: input::non_blank(&stock).map(input::parse_stock).transpose()?,
        };

        let outcome = match self.inventory.update(id, changes.clone()) {
            Ok(outcome) => outcome,
            Err(e) => {
                writeln!(self.output, "Error: {e}")?;
                return Ok(());
            }
        };

        if let (FieldOutcome::Applied, Some(name)) = (&outcome.name, &changes.name) {
            writeln!(self.output, "Name updated to '{name}'.")?;
        }
        match (&outcome.price, changes.price) {
            (FieldOutcome::Applied, Some(price)) => {
                writeln!(self.output, "Price updated to {:.2} €.", price.round_dp(2))?
            }
            (FieldOutcome::Rejected(e), _) => writeln!(self.output, "Error: {e}")?,
            _ => {}
        }
        match (&outcome.stock, changes.stock) {
            (FieldOutcome::Applied, Some(stock)) => {
                writeln!(self.output, "Stock updated to {stock}.")?
            }
            (FieldOutcome::Rejected(e), _) => writeln!(self.output, "Error: {e}")?,
            _ => {}
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<(), InputError> {
        let id = input::parse_id(&self.prompt("ID of the article to delete: ")?)?;

        match self.inventory.delete(id) {
            Ok(article) => writeln!(
                self.output,
                "Article '{}' removed from inventory.",
                article.name()
            )?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(())
    }

    fn show(&mut self) -> Result<(), InputError> {
        if self.inventory.is_empty() {
            writeln!(self.output, "The inventory is empty.")?;
        } else {
            write!(self.output, "{}", table::render(&self.inventory.list()))?;
        }
        Ok(())
    }

    fn search(&mut self) -> Result<(), InputError> {
        let name = self.prompt("Name of the article to search for: ")?;

        match self.inventory.find_by_name(&name) {
            NameLookup::EmptyInventory => {
                writeln!(self.output, "Error: the inventory is empty; nothing to search.")?
            }
            NameLookup::Matches(found) if found.is_empty() => {
                writeln!(self.output, "No article found with name '{name}'.")?
            }
            NameLookup::Matches(found) => write!(self.output, "{}", table::render(&found))?,
        }
        Ok(())
    }
}

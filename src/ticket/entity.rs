use crate::collection::Entity;
use crate::domain::{Ticket, TicketPatch};

impl Entity for Ticket {
    type Id = String;
    type Patch = TicketPatch;

    fn id(&self) -> &String { &self.id }

    fn on_update(&mut self, patch: TicketPatch) -> Result<(), String> {
        if let Some(price) = patch.price {
            if !price.is_finite() || price < 0.0 {
                return Err(format!("Invalid price: {}", price));
            }
            self.price = price;
        }
        Ok(())
    }
}

//! 操作成功后展示给用户的提示

use hissab_common::Notice;

use crate::domain::entities::{ProductionRecord, SaleRecord};

pub fn signed_in() -> Notice {
    Notice::new("Success", "Login successful! (This is just a demo)")
}

pub fn signed_up() -> Notice {
    Notice::new("Success", "Account created successfully!")
}

pub fn signed_out() -> Notice {
    Notice::new("Logged out", "You have been successfully logged out")
}

pub fn profile_updated() -> Notice {
    Notice::new("Profile updated", "Your profile has been updated successfully")
}

pub fn password_updated() -> Notice {
    Notice::new("Password updated", "Your password has been changed successfully")
}

pub fn sale_recorded(sale: &SaleRecord) -> Notice {
    Notice::new(
        "Sale entry added",
        format!("Sale to {} has been recorded successfully.", sale.party_name),
    )
}

pub fn production_recorded(record: &ProductionRecord) -> Notice {
    Notice::new(
        "Production entry added",
        format!(
            "Production entry for Lot {} has been recorded successfully.",
            record.lot_no
        ),
    )
}

pub fn transaction_recorded() -> Notice {
    Notice::new("Success", "Transaction added successfully!")
}

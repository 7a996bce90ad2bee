use crate::errors::SaleError;
use crate::storage::{get_config, set_whitelisted};
use soroban_sdk::{Address, Env, Vec};

fn require_private_sale(env: &Env) -> Result<(), SaleError> {
    if !get_config(env)?.is_private_sale {
        return Err(SaleError::IsPublicSale);
    }
    Ok(())
}

pub fn batch_add(env: &Env, addresses: &Vec<Address>) -> Result<(), SaleError> {
    require_private_sale(env)?;
    for address in addresses.iter() {
        set_whitelisted(env, &address, true);
    }
    Ok(())
}

pub fn batch_remove(env: &Env, addresses: &Vec<Address>) -> Result<(), SaleError> {
    require_private_sale(env)?;
    for address in addresses.iter() {
        set_whitelisted(env, &address, false);
    }
    Ok(())
}

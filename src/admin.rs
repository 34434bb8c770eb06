multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_ADDRESS, ERR_NOT_ADMINISTRATOR};

/// Administrator capability. Privileged endpoints pass the verified caller
/// to `require_administrator` explicitly instead of relying on the
/// deployer-owner check of the framework.
#[multiversx_sc::module]
pub trait AdminModule: crate::events::EventsModule {
    #[endpoint(setAdministrator)]
    fn set_administrator(&self, new_administrator: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.require_administrator(&caller);
        require!(!new_administrator.is_zero(), ERR_INVALID_ADDRESS);

        self.administrator().set(&new_administrator);
        self.administrator_changed_event(&caller, &new_administrator);
    }

    fn require_administrator(&self, caller: &ManagedAddress) {
        require!(self.is_administrator(caller), ERR_NOT_ADMINISTRATOR);
    }

    fn is_administrator(&self, address: &ManagedAddress) -> bool {
        !self.administrator().is_empty() && &self.administrator().get() == address
    }

    #[view(getAdministrator)]
    #[storage_mapper("administrator")]
    fn administrator(&self) -> SingleValueMapper<ManagedAddress>;
}

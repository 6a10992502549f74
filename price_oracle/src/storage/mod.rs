multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Feed answering the price of one whole unit of `asset`.
    #[storage_mapper("feeds")]
    fn feeds(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<ManagedAddress>;
}

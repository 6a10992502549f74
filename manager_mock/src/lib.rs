#![no_std]

multiversx_sc::imports!();

/// Permission authority with switchable answers.
///
/// Everything is allowed after deploy. Each kind of action can be turned off globally, and
/// transfers can additionally be refused for single accounts.
#[multiversx_sc::contract]
pub trait ManagerMock {
    #[init]
    fn init(&self) {
        self.transfer_allowed().set(true);
        self.deposit_allowed().set(true);
        self.borrow_allowed().set(true);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setTransferAllowed)]
    fn set_transfer_allowed(&self, allowed: bool) {
        self.transfer_allowed().set(allowed);
    }

    #[endpoint(setDepositAllowed)]
    fn set_deposit_allowed(&self, allowed: bool) {
        self.deposit_allowed().set(allowed);
    }

    #[endpoint(setBorrowAllowed)]
    fn set_borrow_allowed(&self, allowed: bool) {
        self.borrow_allowed().set(allowed);
    }

    #[endpoint(setBlocked)]
    fn set_blocked(&self, account: ManagedAddress, blocked: bool) {
        self.blocked(&account).set(blocked);
    }

    #[view(canTransfer)]
    fn can_transfer(
        &self,
        _market: ManagedAddress,
        from: ManagedAddress,
        to: ManagedAddress,
        _amount: BigUint,
    ) -> bool {
        self.transfer_allowed().get() && !self.blocked(&from).get() && !self.blocked(&to).get()
    }

    #[view(canDeposit)]
    fn can_deposit(
        &self,
        _market: ManagedAddress,
        account: ManagedAddress,
        _amount: BigUint,
    ) -> bool {
        self.deposit_allowed().get() && !self.blocked(&account).get()
    }

    #[view(canBorrow)]
    fn can_borrow(
        &self,
        _market: ManagedAddress,
        account: ManagedAddress,
        _amount: BigUint,
    ) -> bool {
        self.borrow_allowed().get() && !self.blocked(&account).get()
    }

    #[storage_mapper("transfer_allowed")]
    fn transfer_allowed(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("deposit_allowed")]
    fn deposit_allowed(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("borrow_allowed")]
    fn borrow_allowed(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("blocked")]
    fn blocked(&self, account: &ManagedAddress) -> SingleValueMapper<bool>;
}

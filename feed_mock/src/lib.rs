#![no_std]

multiversx_sc::imports!();

/// Price feed returning whatever answer was last set.
#[multiversx_sc::contract]
pub trait FeedMock {
    #[init]
    fn init(&self, answer: BigInt, decimals: u8) {
        self.answer().set(answer);
        self.decimals().set(decimals);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setAnswer)]
    fn set_answer(&self, answer: BigInt) {
        self.answer().set(answer);
    }

    #[endpoint(setDecimals)]
    fn set_decimals(&self, decimals: u8) {
        self.decimals().set(decimals);
    }

    #[view(latestAnswer)]
    fn latest_answer(&self) -> BigInt {
        self.answer().get()
    }

    #[view(decimals)]
    #[storage_mapper("decimals")]
    fn decimals(&self) -> SingleValueMapper<u8>;

    #[storage_mapper("answer")]
    fn answer(&self) -> SingleValueMapper<BigInt>;
}

fn main() {
    multiversx_sc_meta_lib::cli_main::<receiver_mock::AbiProvider>();
}

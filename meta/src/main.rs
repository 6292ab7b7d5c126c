fn main() {
    multiversx_sc_meta_lib::cli_main::<aminal_breeding::AbiProvider>();
}

fn main() {
    ip_print::print_ip(&(192u8, 168u16, 0u8, 1u8));
}

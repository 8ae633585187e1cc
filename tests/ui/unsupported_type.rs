fn main() {
    ip_print::print_ip(&1.5f64);
}

fn main() {
    yukon::run();
}

fn main() {
    foodie::run();
}

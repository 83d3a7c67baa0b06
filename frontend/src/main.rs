fn main() {
    campus_attendance_frontend::start();
}

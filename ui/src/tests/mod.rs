mod log_capture;

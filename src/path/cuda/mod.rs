mod spline_path;

mod cluster_tests;
mod director_site_tests;
mod pvdc_tests;
mod vdc_tests;

//! Indonesian / English UI strings.

/// Display language. Held in memory only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lang {
	#[default]
	Id,
	En,
}

impl Lang {
	/// BCP 47 code, also used for the `<html lang>` attribute.
	pub fn code(self) -> &'static str {
		match self {
			Lang::Id => "id",
			Lang::En => "en",
		}
	}

	pub fn toggled(self) -> Self {
		match self {
			Lang::Id => Lang::En,
			Lang::En => Lang::Id,
		}
	}

	pub fn strings(self) -> &'static Translations {
		match self {
			Lang::Id => &ID,
			Lang::En => &EN,
		}
	}
}

/// Flat set of UI strings for one language.
#[derive(Debug)]
pub struct Translations {
	pub nav_projects: &'static str,
	pub nav_services: &'static str,
	pub nav_graph: &'static str,
	pub nav_about: &'static str,
	pub hero_title: &'static str,
	pub hero_explore: &'static str,
	pub hero_selected: &'static str,
	pub hero_repos: &'static str,
	pub hero_fullstack: &'static str,
	pub current_focus: &'static str,
	pub focus_items: [&'static str; 3],
	pub services_kicker: &'static str,
	pub services_title: &'static str,
	pub service_web_title: &'static str,
	pub service_web_desc: &'static str,
	pub service_auto_title: &'static str,
	pub service_auto_desc: &'static str,
	pub service_product_title: &'static str,
	pub service_product_desc: &'static str,
	pub service_cyber_title: &'static str,
	pub service_cyber_desc: &'static str,
	pub service_server_title: &'static str,
	pub service_server_desc: &'static str,
	pub projects_kicker: &'static str,
	pub projects_title: &'static str,
	pub card_updated: &'static str,
	pub card_in_development: &'static str,
	pub card_multi_stack: &'static str,
	pub card_stars: &'static str,
	pub card_forks: &'static str,
	pub card_visit: &'static str,
	pub graph_kicker: &'static str,
	pub graph_title: &'static str,
	pub graph_copy: &'static str,
	pub legend_github: &'static str,
	pub legend_product: &'static str,
	pub legend_click: &'static str,
	pub about_kicker: &'static str,
	pub about_email: &'static str,
	pub about_follow: &'static str,
	pub cta_title: &'static str,
	pub cta_copy: &'static str,
	pub cta_btn: &'static str,
	pub not_found_title: &'static str,
	pub not_found_back: &'static str,
	pub sync_idle: &'static str,
	pub sync_loading: &'static str,
	pub sync_ready: &'static str,
	pub sync_partial: &'static str,
	pub sync_error: &'static str,
}

pub static ID: Translations = Translations {
	nav_projects: "Proyek",
	nav_services: "Layanan",
	nav_graph: "Grafik",
	nav_about: "Tentang",
	hero_title: "Membangun Solusi Web yang Aman dan Terotomasi",
	hero_explore: "Jelajahi GitHub",
	hero_selected: "Proyek pilihan",
	hero_repos: "Repositori GitHub",
	hero_fullstack: "Produk Full-stack",
	current_focus: "Fokus Saat Ini",
	focus_items: [
		"Automation workflow dengan Python",
		"Delivery full-stack yang berorientasi produk",
		"UI interaktif untuk pengalaman portfolio",
	],
	services_kicker: "Apa yang Saya Tawarkan",
	services_title: "Layanan & Keahlian",
	service_web_title: "Web Development",
	service_web_desc: "Membangun website responsif dengan performa tinggi menggunakan React dan ekosistem modern.",
	service_auto_title: "Automation Flow",
	service_auto_desc: "Otomasi tugas repetitif menggunakan Python untuk efisiensi workflow yang lebih maksimal.",
	service_product_title: "Product Engineering",
	service_product_desc: "Menangani siklus hidup produk dari ide, arsitektur frontend, hingga integrasi backend.",
	service_cyber_title: "Cybersecurity",
	service_cyber_desc: "Penetration testing dan audit keamanan untuk memastikan aplikasi web aman dari kerentanan.",
	service_server_title: "Server & Linux",
	service_server_desc: "Konfigurasi, pengelolaan server, dan optimasi sistem berbasis Linux untuk deployment yang stabil.",
	projects_kicker: "Proyek Unggulan",
	projects_title: "Eksplorasi Proyek Pilihan",
	card_updated: "Updated",
	card_in_development: "In development",
	card_multi_stack: "Multi Stack",
	card_stars: "Stars",
	card_forks: "Forks",
	card_visit: "Kunjungi",
	graph_kicker: "Jaringan Proyek",
	graph_title: "Visualisasi Ekosistem Proyek",
	graph_copy: "Klik node untuk buka project. Hover node untuk fokus ke koneksi paling relevan.",
	legend_github: "Node Hijau: GitHub Project",
	legend_product: "Node Olive: Product Build",
	legend_click: "Klik node untuk buka project",
	about_kicker: "Tentang Saya",
	about_email: "Hubungi via Email",
	about_follow: "Ikuti di GitHub",
	cta_title: "Punya ide project menarik?",
	cta_copy: "Ayo diskusikan bagaimana aku bisa membantumu mewujudkannya dengan solusi engineering yang tepat.",
	cta_btn: "Mulai Kolaborasi",
	not_found_title: "Halaman tidak ditemukan",
	not_found_back: "Kembali ke beranda",
	sync_idle: "Menunggu sinkronisasi data.",
	sync_loading: "Syncing data dari GitHub...",
	sync_ready: "Data GitHub berhasil diperbarui.",
	sync_partial: "Sebagian data berhasil disinkronkan.",
	sync_error: "Sync gagal. Menampilkan data fallback.",
};

pub static EN: Translations = Translations {
	nav_projects: "Projects",
	nav_services: "Services",
	nav_graph: "Graph",
	nav_about: "About",
	hero_title: "Building Secure and Automated Web Solutions",
	hero_explore: "Explore GitHub",
	hero_selected: "Selected projects",
	hero_repos: "GitHub repositories",
	hero_fullstack: "Full-stack product",
	current_focus: "Current Focus",
	focus_items: [
		"Automation workflows in Python",
		"Product-first full-stack delivery",
		"Interactive UI for portfolio experience",
	],
	services_kicker: "What I Offer",
	services_title: "Services & Expertise",
	service_web_title: "Web Development",
	service_web_desc: "Building responsive, high-performance websites using React and modern ecosystems.",
	service_auto_title: "Automation Flow",
	service_auto_desc: "Automating repetitive tasks using Python for maximum workflow efficiency.",
	service_product_title: "Product Engineering",
	service_product_desc: "Managing product lifecycles from ideation and frontend architecture to backend integration.",
	service_cyber_title: "Cybersecurity",
	service_cyber_desc: "Penetration testing and security audits to ensure web applications are safe from vulnerabilities.",
	service_server_title: "Server & Linux",
	service_server_desc: "Configuration, server management, and optimization of Linux-based systems for stable deployments.",
	projects_kicker: "Featured Projects",
	projects_title: "Exploring Featured Projects",
	card_updated: "Updated",
	card_in_development: "In development",
	card_multi_stack: "Multi Stack",
	card_stars: "Stars",
	card_forks: "Forks",
	card_visit: "Visit",
	graph_kicker: "Project Network",
	graph_title: "Project Ecosystem Visualization",
	graph_copy: "Click node to open project. Hover node to focus on the most relevant connections.",
	legend_github: "Green node: GitHub project",
	legend_product: "Olive node: Product build",
	legend_click: "Click a node to open the project",
	about_kicker: "About Me",
	about_email: "Contact via Email",
	about_follow: "Follow on GitHub",
	cta_title: "Have an interesting project idea?",
	cta_copy: "Let's discuss how I can help you realize it with the right engineering solutions.",
	cta_btn: "Start Collaboration",
	not_found_title: "Page not found",
	not_found_back: "Back to home",
	sync_idle: "Waiting for data synchronization.",
	sync_loading: "Syncing data from GitHub...",
	sync_ready: "GitHub data successfully updated.",
	sync_partial: "Partial data synchronized.",
	sync_error: "Sync failed. Showing fallback data.",
};

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_language_is_indonesian() {
		assert_eq!(Lang::default(), Lang::Id);
		assert_eq!(Lang::default().code(), "id");
	}

	#[test]
	fn toggle_flips_between_languages() {
		assert_eq!(Lang::Id.toggled(), Lang::En);
		assert_eq!(Lang::Id.toggled().toggled(), Lang::Id);
	}

	#[test]
	fn strings_follow_language() {
		assert_eq!(Lang::Id.strings().nav_projects, "Proyek");
		assert_eq!(Lang::En.strings().nav_projects, "Projects");
	}
}

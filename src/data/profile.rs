use super::projects::Localized;

#[derive(Clone, Debug)]
pub struct ProfileLinks {
	pub github: &'static str,
	pub email: &'static str,
	pub linkedin: &'static str,
	pub instagram: &'static str,
}

#[derive(Clone, Debug)]
pub struct Profile {
	pub name: &'static str,
	pub handle: &'static str,
	pub intro: Localized,
	pub about: Localized,
	pub links: ProfileLinks,
}

pub fn profile() -> Profile {
	Profile {
		name: "Muhammad Tubagus Farrasandi",
		handle: "FaYeest",
		intro: Localized::new(
			"Aku membangun produk web yang clean, cepat, dan terstruktur. Fokusku ada di backend integration, automation flow, dan pengalaman user yang tetap terasa human.",
			"I build clean, fast, and structured web products. My focus is on backend integration, automation flows, and user experiences that feel human.",
		),
		about: Localized::new(
			"Halo! Saya Muhammad Tubagus Farrasandi, seorang mahasiswa Computer Science/IT yang berfokus pada pengembangan solusi web yang aman dan efisien. Perjalanan saya di dunia teknologi dimulai dari ketertarikan pada automasi dan terus berkembang hingga ke ranah full-stack engineering serta keamanan siber.",
			"Hello! I am Muhammad Tubagus Farrasandi, a Computer Science student dedicated to building secure and efficient web solutions. My journey in technology began with a passion for automation and has evolved into full-stack engineering and cybersecurity.",
		),
		links: ProfileLinks {
			github: "https://github.com/FaYeest",
			email: "mailto:mtbfarrasandi@gmail.com",
			linkedin: "https://www.linkedin.com/in/muhammad-tubagus-farrasandi",
			instagram: "https://www.instagram.com/guudd_",
		},
	}
}

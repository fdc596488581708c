//! Fixed promotional content shown on the landing page.

pub const LOGO_URL: &str = "https://jovemaprendiz.b-cdn.net/logo%20jovem%20aprendiz%20microlins.png";
pub const OPEN_POSITIONS: u32 = 933;
pub const CONTACT_EMAIL: &str = "contato@jovemaprendiz.com";
pub const CONTACT_PHONE: &str = "0800 123 4567";

pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub text: &'static str,
}

pub struct VideoTestimonial {
    pub name: &'static str,
    pub embed_url: &'static str,
}

pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FAQ: &[FaqItem] = &[
    FaqItem {
        question: "Quem pode participar?",
        answer: "Jovens entre 14 e 24 anos que estejam cursando ou tenham concluído o ensino médio.",
    },
    FaqItem {
        question: "Qual é a carga horária?",
        answer: "A carga horária é de 20 a 30 horas semanais, compatível com seus estudos.",
    },
    FaqItem {
        question: "Preciso pagar algo para me inscrever?",
        answer: "Não! A inscrição é totalmente gratuita.",
    },
    FaqItem {
        question: "Quanto tempo dura o programa?",
        answer: "O programa tem duração de 15 a 24 meses, dependendo do curso escolhido.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Ana Silva",
        role: "Ex-Jovem Aprendiz",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&q=80&w=200&h=200",
        text: "O programa mudou minha vida! Hoje trabalho na empresa onde fiz meu aprendizado.",
    },
    Testimonial {
        name: "Pedro Santos",
        role: "Jovem Aprendiz Atual",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=crop&q=80&w=200&h=200",
        text: "Estou aprendendo muito e já consigo ver um futuro brilhante pela frente.",
    },
    Testimonial {
        name: "Júlia Oliveira",
        role: "Ex-Jovem Aprendiz",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&q=80&w=200&h=200",
        text: "A experiência prática que adquiri foi fundamental para minha carreira.",
    },
];

pub const VIDEO_TESTIMONIALS: &[VideoTestimonial] = &[
    VideoTestimonial { name: "Carolina Silva", embed_url: "https://player.vimeo.com/video/1082032380" },
    VideoTestimonial { name: "Gustavo Lira", embed_url: "https://player.vimeo.com/video/1082032406" },
    VideoTestimonial { name: "Laís Sousa", embed_url: "https://player.vimeo.com/video/1082032355" },
];

pub const BENEFITS: &[Card] = &[
    Card { title: "Formação Profissional", description: "Certificação reconhecida no mercado de trabalho" },
    Card { title: "Experiência Prática", description: "Aprenda com as melhores empresas parceiras" },
    Card { title: "Remuneração", description: "Salário e benefícios garantidos por lei" },
    Card { title: "Horários Flexíveis", description: "Compatível com seus estudos" },
];

pub const STEPS: &[Card] = &[
    Card { title: "Inscrição", description: "Preencha o formulário nesta página" },
    Card { title: "Contato", description: "Aguarde nosso contato via WhatsApp" },
    Card { title: "Entrevista", description: "Compareça à entrevista de seleção" },
    Card { title: "Início", description: "Inicie sua jornada como Jovem Aprendiz" },
];

/// Next steps listed on the confirmation page.
pub const NEXT_STEPS: &[&str] = &[
    "Nossa equipe irá avaliar seu perfil",
    "Você poderá ser convidado para uma entrevista inicial",
    "Se necessário, indicaremos cursos de qualificação para aumentar suas chances",
    "Seu perfil será apresentado às empresas parceiras",
];

//! Per-locale first- and last-name pools.

use super::NamePool;

pub(super) const EN_FEMALE: NamePool = NamePool::new(&[
    "Abigail", "Alice", "Amanda", "Amelia", "Amy", "Anna", "Ashley", "Barbara", "Betty",
    "Brenda", "Carol", "Caroline", "Charlotte", "Chloe", "Deborah", "Diane", "Donna",
    "Dorothy", "Eleanor", "Elizabeth", "Emily", "Emma", "Evelyn", "Grace", "Hannah",
    "Harper", "Heather", "Helen", "Isabella", "Jennifer", "Jessica", "Joyce", "Julia",
    "Karen", "Katherine", "Kimberly", "Laura", "Linda", "Lisa", "Lucy", "Madison", "Margaret",
    "Maria", "Mary", "Megan", "Melissa", "Michelle", "Mia", "Nancy", "Natalie", "Nicole",
    "Olivia", "Pamela", "Patricia", "Rachel", "Rebecca", "Ruth", "Samantha", "Sandra",
    "Sarah", "Sharon", "Shirley", "Sophia", "Stephanie", "Susan", "Victoria", "Virginia",
    "Zoe",
]);

pub(super) const EN_MALE: NamePool = NamePool::new(&[
    "Aaron", "Adam", "Alexander", "Andrew", "Anthony", "Benjamin", "Brandon", "Brian",
    "Charles", "Christopher", "Daniel", "David", "Dennis", "Donald", "Edward", "Eric",
    "Ethan", "Frank", "Gary", "George", "Gregory", "Harry", "Henry", "Jack", "Jacob", "James",
    "Jason", "Jeffrey", "John", "Jonathan", "Joseph", "Joshua", "Justin", "Kenneth", "Kevin",
    "Larry", "Liam", "Mark", "Matthew", "Michael", "Nathan", "Nicholas", "Noah", "Oliver",
    "Patrick", "Paul", "Peter", "Raymond", "Richard", "Robert", "Ronald", "Ryan", "Samuel",
    "Scott", "Stephen", "Steven", "Thomas", "Timothy", "Tyler", "Walter", "William",
]);

pub(super) const EN_LAST: NamePool = NamePool::new(&[
    "Adams", "Allen", "Anderson", "Bailey", "Baker", "Bell", "Brooks", "Brown", "Campbell",
    "Carter", "Clark", "Collins", "Cook", "Cooper", "D'Angelo", "Davies", "Davis", "Edwards",
    "Evans", "Fisher", "Foster", "Green", "Hall", "Harris", "Hill", "Hughes", "Jackson",
    "Johnson", "Jones", "Kelly", "King", "Lee", "Lewis", "Martin", "Miller", "Mitchell",
    "Moore", "Morgan", "Morris", "Murphy", "Nelson", "O'Brien", "O'Connor", "O'Neill",
    "Parker", "Phillips", "Price", "Reed", "Roberts", "Robinson", "Rogers", "Scott",
    "Smith", "Stewart", "Taylor", "Thomas", "Thompson", "Turner", "Walker", "Ward",
    "Watson", "White", "Williams", "Wilson", "Wood", "Wright", "Young",
]);

pub(super) const DE_FEMALE: NamePool = NamePool::new(&[
    "Andrea", "Angelika", "Anja", "Anke", "Anna", "Annett", "Bärbel", "Birgit", "Brigitte",
    "Charlotte", "Christa", "Christine", "Claudia", "Doris", "Elke", "Emma", "Erika",
    "Frauke", "Gabriele", "Gertrud", "Gisela", "Greta", "Hannelore", "Heike", "Helga",
    "Ilse", "Ingrid", "Jana", "Jutta", "Karin", "Katharina", "Kerstin", "Lea", "Lena",
    "Lotte", "Luise", "Marlene", "Martina", "Mia", "Monika", "Nicole", "Petra", "Renate",
    "Sabine", "Sandra", "Silke", "Sophie", "Stefanie", "Susanne", "Sybille", "Tanja",
    "Ulrike", "Ursula", "Ute", "Waltraud", "Wiebke", "Änne",
]);

pub(super) const DE_MALE: NamePool = NamePool::new(&[
    "Alexander", "Andreas", "Bernd", "Christian", "Dieter", "Dirk", "Elias", "Felix",
    "Frank", "Friedrich", "Georg", "Gerhard", "Günter", "Günther", "Hans", "Heinz",
    "Helmut", "Horst", "Jan", "Jens", "Joachim", "Jonas", "Jörg", "Jürgen", "Karl",
    "Klaus", "Lars", "Leon", "Lukas", "Manfred", "Matthias", "Maximilian", "Michael",
    "Norbert", "Oliver", "Paul", "Peter", "Rainer", "Ralf", "Rüdiger", "Sebastian",
    "Stefan", "Sören", "Thomas", "Thorsten", "Uwe", "Volker", "Werner", "Wolfgang",
]);

pub(super) const DE_LAST: NamePool = NamePool::new(&[
    "Bauer", "Becker", "Beck", "Böhm", "Braun", "Dietrich", "Engel", "Fischer", "Frank",
    "Fuchs", "Groß", "Günther", "Hahn", "Hartmann", "Hoffmann", "Horn", "Huber", "Jäger",
    "Kaiser", "Keller", "Klein", "Koch", "König", "Köhler", "Krämer", "Krause", "Krüger",
    "Kuhn", "Lange", "Lehmann", "Lorenz", "Ludwig", "Maier", "Meyer", "Möller", "Müller",
    "Neumann", "Otto", "Peters", "Richter", "Roth", "Schäfer", "Schmid", "Schmidt",
    "Schmitt", "Schneider", "Scholz", "Schröder", "Schubert", "Schulz", "Schwarz",
    "Seidel", "Simon", "Sommer", "Vogel", "Vogt", "Wagner", "Walter", "Weber", "Weiß",
    "Winkler", "Wolf", "Zimmermann",
]);

pub(super) const FR_FEMALE: NamePool = NamePool::new(&[
    "Adèle", "Agnès", "Amélie", "Anaïs", "Anne", "Aurélie", "Béatrice", "Camille",
    "Cécile", "Céline", "Chloé", "Claire", "Clémence", "Colette", "Delphine", "Élodie",
    "Éloïse", "Émilie", "Françoise", "Geneviève", "Hélène", "Inès", "Isabelle", "Jeanne",
    "Joséphine", "Juliette", "Laëtitia", "Léa", "Léonie", "Lucie", "Madeleine", "Manon",
    "Margaux", "Marie", "Mathilde", "Mélanie", "Nathalie", "Noémie", "Océane", "Pénélope",
    "Rosalie", "Sandrine", "Solène", "Sophie", "Stéphanie", "Sylvie", "Thérèse", "Valérie",
    "Véronique", "Zoé",
]);

pub(super) const FR_MALE: NamePool = NamePool::new(&[
    "Adrien", "Alexandre", "André", "Antoine", "Aurélien", "Benoît", "Bernard", "Cédric",
    "Christophe", "Clément", "Denis", "Didier", "Émile", "Éric", "Étienne", "Fabrice",
    "François", "Frédéric", "Gaël", "Gaëtan", "Gérard", "Guillaume", "Hervé", "Hugo",
    "Jacques", "Jean", "Jérôme", "Joël", "Julien", "Léo", "Louis", "Lucas", "Marc",
    "Mathieu", "Maxime", "Michel", "Nicolas", "Noël", "Olivier", "Pascal", "Philippe",
    "Pierre", "Raphaël", "Rémi", "Sébastien", "Stéphane", "Théo", "Thierry", "Timothée",
    "Valentin", "Yves",
]);

pub(super) const FR_LAST: NamePool = NamePool::new(&[
    "André", "Barbier", "Bélanger", "Bernard", "Bertrand", "Blanc", "Boucher", "Bourgeois",
    "Brunet", "Chevalier", "Clément", "Côté", "D'Aubigné", "Dubois", "Dumont",
    "Dupont", "Durand", "Fabre", "Faure", "Fontaine", "Fournier", "François", "Gagné",
    "Garnier", "Gauthier", "Girard", "Hébert", "Joly", "L'Héritier", "Lambert", "Laurent",
    "Leclerc", "Lefèbvre", "Lefèvre", "Lemaître", "Léger", "Martin", "Mercier", "Michel",
    "Moreau", "Morel", "Noël", "Perrin", "Petit", "Renaud", "Richard", "Robert", "Roux",
    "Simon", "Thomas", "Vidal", "Vincent",
]);
